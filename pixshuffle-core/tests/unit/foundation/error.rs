use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixshuffleError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        PixshuffleError::dimension_mismatch((4, 3), (3, 4))
            .to_string()
            .contains("dimension mismatch: expected 4x3, got 3x4")
    );
    assert!(
        PixshuffleError::io("write 'a.png'", std::io::Error::other("denied"))
            .to_string()
            .starts_with("io error: write 'a.png'")
    );
}

#[test]
fn io_preserves_source() {
    let err = PixshuffleError::io("create dir", std::io::Error::other("boom"));
    assert!(err.to_string().contains("boom"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixshuffleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
