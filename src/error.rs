/// Fatal environment errors: the info file cannot even be located.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    #[error("bad environment: missing variable {0}")]
    MissingEnvVar(&'static str),
    #[error("bad environment: cannot determine the home directory")]
    MissingHomeDir,
}
