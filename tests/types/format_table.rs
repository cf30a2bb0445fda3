use std::path::Path;

use crate::common::{settings, Plain};
use trace_rail::{propagate, rendered, set_default_format, set_source_root, Format, Rendered};

struct Case {
    format: Format,
    specifier: &'static str,
    apply: fn(Rendered<'_>) -> String,
    expected_plain: String,
    expected_traced: String,
}

#[test]
fn format_table() {
    let _settings = settings();
    let plain = Plain("plain");

    let dir = Path::new(file!()).parent().map(|p| p.to_string_lossy().into_owned());
    set_source_root(dir.unwrap_or_default());
    let line = line!() + 1;
    let traced = propagate!(plain.clone(), "decorated");

    let full = format!("decorated\n --- at format_table.rs:{line} (format_table) ---\nCaused by: plain");
    let brief = "decorated: plain".to_string();

    let cases = [
        Case {
            format: Format::Full,
            specifier: "{}",
            apply: |r| format!("{}", r),
            expected_plain: "plain".into(),
            expected_traced: full.clone(),
        },
        Case {
            format: Format::Full,
            specifier: "{:?}",
            apply: |r| format!("{:?}", r),
            expected_plain: "\"plain\"".into(),
            expected_traced: format!("{:?}", full),
        },
        Case {
            format: Format::Full,
            specifier: "{:105}",
            apply: |r| format!("{:105}", r),
            expected_plain: format!("{}plain", " ".repeat(100)),
            expected_traced: format!("{:>105}", full),
        },
        Case {
            format: Format::Full,
            specifier: "{:#}",
            apply: |r| format!("{:#}", r),
            expected_plain: "plain".into(),
            expected_traced: brief.clone(),
        },
        Case {
            format: Format::Brief,
            specifier: "{}",
            apply: |r| format!("{}", r),
            expected_plain: "plain".into(),
            expected_traced: brief.clone(),
        },
        Case {
            format: Format::Brief,
            specifier: "{:?}",
            apply: |r| format!("{:?}", r),
            expected_plain: "\"plain\"".into(),
            expected_traced: "\"decorated: plain\"".into(),
        },
        Case {
            format: Format::Brief,
            specifier: "{:20}",
            apply: |r| format!("{:20}", r),
            expected_plain: "               plain".into(),
            expected_traced: "    decorated: plain".into(),
        },
        Case {
            format: Format::Brief,
            specifier: "{:+}",
            apply: |r| format!("{:+}", r),
            expected_plain: "plain".into(),
            expected_traced: full.clone(),
        },
    ];

    for case in cases {
        set_default_format(case.format);

        let actual_plain = (case.apply)(rendered(&plain));
        assert_eq!(
            actual_plain, case.expected_plain,
            "plain error, {} under {}",
            case.specifier, case.format
        );

        let actual_traced = (case.apply)(rendered(&traced));
        assert_eq!(
            actual_traced, case.expected_traced,
            "traced error, {} under {}",
            case.specifier, case.format
        );
    }
}

#[test]
fn traced_error_formats_like_the_adapter() {
    let _settings = settings();
    let traced = propagate!(Plain("plain"), "decorated");

    for format in [Format::Full, Format::Brief] {
        set_default_format(format);
        assert_eq!(format!("{}", traced), format!("{}", rendered(&traced)));
        assert_eq!(format!("{:?}", traced), format!("{:?}", rendered(&traced)));
        assert_eq!(format!("{:+30}", traced), format!("{:+30}", rendered(&traced)));
        assert_eq!(format!("{:<#30}", traced), format!("{:<#30}", rendered(&traced)));
    }
}
