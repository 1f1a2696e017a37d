use crate::config::IdScheme;

/// Monotonic identifier source for one collection.
///
/// Sequential ids start one past the largest numeric id seen at
/// construction and only ever move forward, so removing or editing rows can
/// never cause a reissued id.
#[derive(Clone, Debug)]
pub struct IdSequence {
    scheme: IdScheme,
    next: u64,
}

impl IdSequence {
    /// Start a sequence after the given existing sequence numbers.
    pub fn starting_after(scheme: IdScheme, existing: impl IntoIterator<Item = u64>) -> Self {
        let next = existing.into_iter().max().map_or(1, |max| max + 1);
        Self { scheme, next }
    }

    /// Issue the next identifier.
    pub fn next_id(&mut self) -> String {
        match self.scheme {
            IdScheme::Sequential => {
                let id = self.next;
                self.next += 1;
                id.to_string()
            }
            IdScheme::Uuid => uuid::Uuid::now_v7().to_string(),
        }
    }

    /// The number the next sequential id will carry.
    #[cfg(test)]
    pub(crate) fn peek(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_starts_at_one() {
        let mut seq = IdSequence::starting_after(IdScheme::Sequential, std::iter::empty());
        assert_eq!(seq.next_id(), "1");
        assert_eq!(seq.next_id(), "2");
    }

    #[test]
    fn continues_after_largest_existing() {
        let mut seq = IdSequence::starting_after(IdScheme::Sequential, [3, 9, 4]);
        assert_eq!(seq.peek(), 10);
        assert_eq!(seq.next_id(), "10");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut seq = IdSequence::starting_after(IdScheme::Uuid, std::iter::empty());
        let a = seq.next_id();
        let b = seq.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
