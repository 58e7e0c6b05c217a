use std::path::PathBuf;

use serde::Deserialize;

use crate::RResult;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// The file searched by `locate_manifest`.
    /// Default is `"package.json"`.
    pub description_file: String,
    /// Treat a path that does not exist as a file, so the search
    /// goes on from its parent instead of failing.
    /// Default is `true`.
    pub missing_as_file: bool,
    /// The last directory to look in. The search ends with
    /// nothing found after this level.
    /// Default is `None`, which walks up to the root.
    pub stop_dir: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        let description_file = String::from("package.json");
        let missing_as_file = true;
        let stop_dir = None;
        Self {
            description_file,
            missing_as_file,
            stop_dir,
        }
    }
}

impl Options {
    pub fn from_json(raw: &str) -> RResult<Self> {
        tracing::debug_span!("options_from_json").in_scope(|| Ok(serde_json::from_str(raw)?))
    }
}

#[test]
fn options_from_json() {
    let options = Options::from_json(r#"{ "descriptionFile": "deno.json" }"#).unwrap();
    assert_eq!(options.description_file, "deno.json");
    assert!(options.missing_as_file);
    assert_eq!(options.stop_dir, None);

    let options = Options::from_json(r#"{ "missingAsFile": false, "stopDir": "/a" }"#).unwrap();
    assert_eq!(options.description_file, "package.json");
    assert!(!options.missing_as_file);
    assert_eq!(options.stop_dir, Some(PathBuf::from("/a")));

    assert!(matches!(
        Options::from_json("{ descriptionFile"),
        Err(crate::Error::UnexpectedJson(_))
    ));
}
