use crate::Point;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{op}: invalid argument, {what}")]
    InvalidArgument {
        op: &'static str,
        what: &'static str,
    },
    #[error("point {0:?} is outside of the tree's domain")]
    OutOfDomain(Point),
}

pub type Result<T> = std::result::Result<T, Error>;
