use std::fmt;

use super::classified::ClassifiedKeepSpec;

/// Collaborator contract for the external rule-grammar text format.
///
/// The core never reads or writes rule-grammar text itself; a shell
/// (GUI or CLI) supplies an implementation. `parse_rule_grammar` feeds
/// [`Reconciler::decompose`](crate::Reconciler::decompose) and
/// `write_rule_grammar` consumes [`Reconciler::compose`](crate::Reconciler::compose)
/// output.
pub trait GrammarCodec {
    type Error: std::error::Error;

    fn parse_rule_grammar(&self, resource: &str) -> Result<Vec<ClassifiedKeepSpec>, Self::Error>;

    fn write_rule_grammar(
        &self,
        records: &[ClassifiedKeepSpec],
        destination: &mut dyn fmt::Write,
    ) -> Result<(), Self::Error>;
}
