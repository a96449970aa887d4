//! `.prettierrc` keys and sample.

pub const FILENAME: &str = ".prettierrc";
pub const PRINT_WIDTH_KEY: &str = "printWidth";

pub const SAMPLE: &str = r#"{
  "printWidth": 125,
  "proseWrap": "always",
  "tabWidth": 2,
  "trailingComma": "es5"
}
"#;
