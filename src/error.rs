use thiserror::Error;

/// The only fatal failure mode: composition itself cannot fail (unencodable
/// characters are replaced, never rejected), so errors surface solely when
/// the finished PDF cannot be written out.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
