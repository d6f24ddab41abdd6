#[cfg(test)]
mod tests {
    use crate::commands::KeyKind;
    use crate::config::OutputFormat;
    use crate::handlers::{
        generate_keys, read_key_file, render_report, render_summary, resolve_rounds, timing_line,
    };
    use mod7_core::{Error, KeyShape};
    use mod7_keys::{KeyGenerator, validate, validate_batch};
    use std::io::Write;
    use std::time::Duration;

    fn key_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(content.as_bytes()).expect("write keys");
        file
    }

    #[tokio::test]
    async fn test_generate_both_interleaves() {
        let mut generator = KeyGenerator::seeded(1);
        let keys = generate_keys(&mut generator, KeyKind::Both, 3).await.unwrap();

        assert_eq!(keys.len(), 6);
        for (i, key) in keys.iter().enumerate() {
            let report = validate(key);
            assert!(report.is_valid(), "{} -> {:?}", key, report.violations);
            let expected = if i % 2 == 0 {
                KeyShape::TenDigit
            } else {
                KeyShape::Structured
            };
            assert_eq!(report.shape, expected);
        }
    }

    #[tokio::test]
    async fn test_generate_single_kind() {
        let mut generator = KeyGenerator::seeded(2);
        let keys = generate_keys(&mut generator, KeyKind::Oem, 4).await.unwrap();
        assert_eq!(keys.len(), 4);
        assert!(keys.iter().all(|k| validate(k).shape == KeyShape::Structured));
    }

    #[test]
    fn test_resolve_rounds_clamps_below_one() {
        assert_eq!(resolve_rounds(Some(0), 5), 1);
        assert_eq!(resolve_rounds(Some(-3), 5), 1);
        assert_eq!(resolve_rounds(Some(4), 5), 4);
        assert_eq!(resolve_rounds(None, 5), 5);
        assert_eq!(resolve_rounds(None, 0), 1);
        assert_eq!(resolve_rounds(Some(i64::MAX), 1), u32::MAX);
    }

    #[tokio::test]
    async fn test_zero_rounds_still_generates_one() {
        let mut generator = KeyGenerator::seeded(3);
        let keys = generate_keys(&mut generator, KeyKind::TenDigit, 0).await.unwrap();
        assert_eq!(keys.len(), 1);

        let keys = generate_keys(&mut generator, KeyKind::Both, 0).await.unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(validate(&keys[0]).shape, KeyShape::TenDigit);
        assert_eq!(validate(&keys[1]).shape, KeyShape::Structured);
    }

    #[tokio::test]
    async fn test_timing_counts_both_as_two_keys() {
        let mut generator = KeyGenerator::seeded(4);
        let keys = generate_keys(&mut generator, KeyKind::Both, 1).await.unwrap();
        let line = timing_line("generate", keys.len(), Duration::from_millis(3));
        assert!(line.ends_with("to generate 2 keys."), "{}", line);
    }

    #[test]
    fn test_timing_line_plural() {
        let line = timing_line("validate", 1, Duration::from_micros(250));
        assert!(line.starts_with("Took "));
        assert!(line.ends_with("to validate 1 key."), "{}", line);

        let line = timing_line("generate", 3, Duration::from_secs(2));
        assert!(line.ends_with("to generate 3 keys."), "{}", line);
    }

    #[tokio::test]
    async fn test_read_key_file() {
        let file = key_file(".txt", "111-1111111\n\nhello\n");
        let keys = read_key_file(file.path()).await.unwrap();
        assert_eq!(keys, vec!["111-1111111", "hello"]);
    }

    #[tokio::test]
    async fn test_read_key_file_requires_txt() {
        let file = key_file(".csv", "111-1111111\n");
        let err = read_key_file(file.path()).await.unwrap_err();
        assert!(matches!(err, Error::InvalidKeyFile(_)));
    }

    #[tokio::test]
    async fn test_read_empty_key_file() {
        let file = key_file(".txt", "\n\n");
        let err = read_key_file(file.path()).await.unwrap_err();
        assert!(matches!(err, Error::EmptyKeyFile(_)));
    }

    #[tokio::test]
    async fn test_read_missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_key_file(&dir.path().join("missing.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_render_report_table() {
        console::set_colors_enabled(false);

        let out = render_report(&validate("123-4560007"), OutputFormat::Table).unwrap();
        assert!(out.starts_with("123-4560007 could be a valid CD key."));
        assert!(out.contains("the digit sum (22) must be divisible by 7"));

        let out = render_report(&validate("111-1111111"), OutputFormat::Table).unwrap();
        assert!(out.contains("The key is valid."));

        let out = render_report(&validate("hello"), OutputFormat::Table).unwrap();
        assert!(out.contains("hello doesn't even resemble a valid key."));
    }

    #[test]
    fn test_render_report_json() {
        let out = render_report(&validate("12345-OEM-0123456-00010"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["shape"], "structured");
        assert_eq!(value["violations"][0]["violation"], "year_not_whitelisted");
    }

    #[tokio::test]
    async fn test_render_summary() {
        console::set_colors_enabled(false);

        let summary = validate_batch(vec!["111-1111111".to_string(), "hello".to_string()])
            .await
            .unwrap();

        let out = render_summary(&summary, OutputFormat::Table).unwrap();
        assert!(out.contains("111-1111111 is valid"));
        assert!(out.contains("hello is invalid"));
        assert!(out.contains("1 valid, 1 invalid"));

        let out = render_summary(&summary, OutputFormat::Yaml).unwrap();
        assert!(out.contains("valid: 1"));
    }
}
