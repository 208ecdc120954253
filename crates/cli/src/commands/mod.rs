pub(crate) mod import;
pub(crate) mod query;
pub(crate) mod serve;
