use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Couldn't read leptos configuration: {0}")]
    Config(String),
    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ServeError::Config("missing [package.metadata.leptos]".to_string());
        assert_eq!(
            err.to_string(),
            "Couldn't read leptos configuration: missing [package.metadata.leptos]"
        );
        let err = ServeError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert!(matches!(err, ServeError::Io(_)));
        assert_eq!(err.to_string(), "Server I/O failed: address in use");
    }
}
