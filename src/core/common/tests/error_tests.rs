use crate::core::common::error::OxikdError;
use crate::core::indexing::kdtree::KdTreeError;
use std::error::Error; // Import the Error trait
use std::io;

#[test]
fn test_error_display_and_source() {
    let io_err = OxikdError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
    assert_eq!(format!("{}", io_err), "IO Error: file not found");
    assert!(io_err.source().is_some());

    let config_err = OxikdError::Configuration("max_neighbours must be greater than 0".to_string());
    assert_eq!(
        format!("{}", config_err),
        "Configuration error: max_neighbours must be greater than 0"
    );
    assert!(config_err.source().is_none());

    let kd_err = OxikdError::KdTree(KdTreeError::InvalidInput("no axes".to_string()));
    assert_eq!(format!("{}", kd_err), "KD-Tree Invalid Input: no axes");
    assert!(kd_err.source().is_some());
}

#[test]
fn test_from_std_io_error() {
    let std_io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let oxikd_err: OxikdError = std_io_err.into();
    match oxikd_err {
        OxikdError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        _ => panic!("Expected OxikdError::Io variant"),
    }
}

#[test]
fn test_from_kdtree_error() {
    let kd_err = KdTreeError::DimensionMismatch("expected 2, found 3".to_string());
    let oxikd_err: OxikdError = kd_err.into();
    assert!(matches!(
        oxikd_err,
        OxikdError::KdTree(KdTreeError::DimensionMismatch(_))
    ));
}
