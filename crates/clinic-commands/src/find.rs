//! Search commands and their execution against the model.

use clinic_core::{ClinicModel, KeywordPredicate};

use crate::messages::{persons_listed, LIST_SUCCESS};

/// Outcome of a command, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
}

impl CommandResult {
    /// Create a result with the given feedback.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

/// Narrow the model's view to records matching a keyword predicate.
///
/// Two commands are equal when their predicates are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: KeywordPredicate,
}

impl FindCommand {
    /// Create a find command for a predicate.
    pub fn new(predicate: KeywordPredicate) -> Self {
        Self { predicate }
    }

    /// Get the predicate this command installs.
    pub fn predicate(&self) -> &KeywordPredicate {
        &self.predicate
    }

    /// Filter the model and report how many records match.
    pub fn execute(&self, model: &mut ClinicModel) -> CommandResult {
        model.update_filter(self.predicate.clone());
        let count = model.filtered_patients().len();
        tracing::debug!(predicate = %self.predicate, count, "find executed");
        CommandResult::new(persons_listed(count))
    }
}

/// Every command the parser understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Find(FindCommand),
    /// Show every record again.
    List,
}

impl Command {
    /// Run the command against the model.
    pub fn execute(&self, model: &mut ClinicModel) -> CommandResult {
        match self {
            Command::Find(find) => find.execute(model),
            Command::List => {
                model.clear_filter();
                CommandResult::new(LIST_SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::{Patient, PatientCollection};

    fn model() -> ClinicModel {
        let patient = |name: &str, id: &str| {
            Patient::from_user_input(name, Some(id), "91234567", "p@example.com", "Blk 1", None, &[])
                .unwrap()
        };
        ClinicModel::new(
            PatientCollection::from_patients([
                patient("Alice Tan", "S1A"),
                patient("Bob Lee", "S2B"),
                patient("Charlie Goh", "S3C"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_find_by_name() {
        let mut model = model();
        let result = FindCommand::new(KeywordPredicate::by_name(["alice", "bob"])).execute(&mut model);

        assert_eq!(result.feedback, "2 persons listed!");
        let names: Vec<_> = model
            .filtered_patients()
            .iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(names, vec!["Alice Tan", "Bob Lee"]);
    }

    #[test]
    fn test_find_by_id() {
        let mut model = model();
        let result = FindCommand::new(KeywordPredicate::by_id(["s3c"])).execute(&mut model);
        assert_eq!(result.feedback, "1 persons listed!");
        assert_eq!(model.filtered_patients()[0].name().as_str(), "Charlie Goh");
    }

    #[test]
    fn test_find_no_match() {
        let mut model = model();
        let result = FindCommand::new(KeywordPredicate::by_name(["zed"])).execute(&mut model);
        assert_eq!(result.feedback, "0 persons listed!");
        assert!(model.filtered_patients().is_empty());
        assert_eq!(model.patients().len(), 3);
    }

    #[test]
    fn test_list_resets_filter() {
        let mut model = model();
        FindCommand::new(KeywordPredicate::by_name(["alice"])).execute(&mut model);
        let result = Command::List.execute(&mut model);
        assert_eq!(result.feedback, LIST_SUCCESS);
        assert_eq!(model.filtered_patients().len(), 3);
    }

    #[test]
    fn test_command_equality() {
        let first = FindCommand::new(KeywordPredicate::by_name(["first"]));
        let second = FindCommand::new(KeywordPredicate::by_name(["second"]));

        assert_eq!(first, first.clone());
        assert_eq!(first, FindCommand::new(KeywordPredicate::by_name(["first"])));
        assert_ne!(first, second);
        assert_ne!(first, FindCommand::new(KeywordPredicate::by_id(["first"])));
    }
}
