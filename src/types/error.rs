use thiserror::Error;

/// Validation failures when building a [`Catalog`](crate::Catalog) from
/// parsed resource text.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate filter option path '{path}'")]
    DuplicateOptionPath { path: String },

    #[error("duplicate template label '{label}' in set '{set}'")]
    DuplicateTemplateLabel { set: String, label: String },

    #[error("sets '{first}' and '{second}' share the same retention flags")]
    DuplicateSet { first: String, second: String },

    #[error("unknown access flag '{name}' in template '{template}'")]
    UnknownAccessFlag { template: String, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_option_path_message() {
        let err = CatalogError::DuplicateOptionPath {
            path: "code/merging/vertical".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate filter option path 'code/merging/vertical'"
        );
    }

    #[test]
    fn duplicate_template_label_message() {
        let err = CatalogError::DuplicateTemplateLabel {
            set: "Keep".into(),
            label: "Applications".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate template label 'Applications' in set 'Keep'"
        );
    }

    #[test]
    fn duplicate_set_message() {
        let err = CatalogError::DuplicateSet {
            first: "Keep".into(),
            second: "Also keep".into(),
        };
        assert_eq!(
            err.to_string(),
            "sets 'Keep' and 'Also keep' share the same retention flags"
        );
    }

    #[test]
    fn unknown_access_flag_message() {
        let err = CatalogError::UnknownAccessFlag {
            template: "Applications".into(),
            name: "sealed".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown access flag 'sealed' in template 'Applications'"
        );
    }
}
