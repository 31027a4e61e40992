mod classified;
mod error;
mod filter_option;
mod grammar_io;
mod keep_spec;
mod template;

pub use classified::{ClassifiedKeepSpec, RetentionFlags};
pub use error::CatalogError;
pub use filter_option::FilterOption;
pub use grammar_io::GrammarCodec;
pub use keep_spec::{KeepSpec, access, external_class_name, internal_class_name};
pub use template::{BoilerplateTemplate, TemplateSet};

pub(crate) use keep_spec::ACCESS_FLAG_NAMES;
