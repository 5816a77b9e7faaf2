use sidelens_engine::{read_as_data_uri, ClientError};

#[tokio::test]
async fn encodes_png_bytes_with_png_mime() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shot.png");
    std::fs::write(&path, b"fakepng").expect("write");

    let uri = read_as_data_uri(&path).await.expect("encode");
    assert_eq!(uri, "data:image/png;base64,ZmFrZXBuZw==");
}

#[tokio::test]
async fn jpeg_extension_maps_to_jpeg_mime_case_insensitively() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("photo.JPG");
    std::fs::write(&path, b"fakejpg").expect("write");

    let uri = read_as_data_uri(&path).await.expect("encode");
    assert!(uri.starts_with("data:image/jpeg;base64,"), "got {uri}");
}

#[tokio::test]
async fn unknown_extension_defaults_to_png_mime() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capture.img");
    std::fs::write(&path, b"bytes").expect("write");

    let uri = read_as_data_uri(&path).await.expect("encode");
    assert!(uri.starts_with("data:image/png;base64,"), "got {uri}");
}

#[tokio::test]
async fn missing_file_is_an_image_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.png");

    let err = read_as_data_uri(&path).await.unwrap_err();
    let ClientError::ImageRead { path: reported, .. } = err else {
        panic!("expected ImageRead, got {err:?}");
    };
    assert!(reported.ends_with("nope.png"));
}
