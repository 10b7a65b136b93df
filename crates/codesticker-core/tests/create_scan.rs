use codesticker_core::{api, CipherMethod, Confidence, StickerOptions};
use tempfile::tempdir;

#[test]
fn full_cycle_for_every_cipher_method() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");

    for (i, method) in [
        CipherMethod::Base64Obfuscation,
        CipherMethod::CaesarShift(3),
        CipherMethod::ByteShift(5),
    ]
    .into_iter()
    .enumerate()
    {
        let sticker = temp_dir.path().join(format!("sticker-{i}.png"));

        api::create::prepare()
            .with_message("The cake is a lie")
            .with_method(method)
            .with_output(&sticker)
            .execute()
            .expect("Failed to create sticker");

        let result = api::scan::prepare()
            .with_image(&sticker)
            .with_method(method)
            .execute()
            .expect("Failed to scan sticker");

        assert_eq!(result.text, "The cake is a lie");
        assert_eq!(result.method, method);
        assert_eq!(result.confidence, Confidence::High);
    }
}

#[test]
fn full_cycle_with_unicode_text_through_base64() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let sticker = temp_dir.path().join("unicode.png");
    let message = "Grüße aus Tokyo 🗼";

    api::create::prepare()
        .with_message(message)
        .with_method(CipherMethod::Base64Obfuscation)
        .with_output(&sticker)
        .execute()
        .expect("Failed to create sticker");

    let result = api::scan::prepare()
        .with_image(&sticker)
        .with_method(CipherMethod::Base64Obfuscation)
        .execute()
        .expect("Failed to scan sticker");

    assert_eq!(result.text, message);
}

#[test]
fn full_cycle_with_a_custom_layout() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let sticker = temp_dir.path().join("custom.png");
    let options = StickerOptions {
        width: 256,
        height: 128,
        cell_size: 4,
        ..StickerOptions::default()
    };

    api::create::prepare()
        .with_message("layout test")
        .with_method(CipherMethod::CaesarShift(7))
        .with_output(&sticker)
        .with_options(options.clone())
        .execute()
        .expect("Failed to create sticker");

    let result = api::scan::prepare()
        .with_image(&sticker)
        .with_method(CipherMethod::CaesarShift(7))
        .with_options(options)
        .execute()
        .expect("Failed to scan sticker");

    assert_eq!(result.text, "layout test");
}
