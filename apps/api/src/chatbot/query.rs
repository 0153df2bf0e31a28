use crate::models::catalog::Branch;

/// Chat input after normalization: trimmed, lower-cased, and split into words.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    words: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        let words = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { text, words }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.text.contains(n))
    }
}

/// First branch (iteration order) whose full name appears anywhere in the input.
pub fn branch_named_in<'a>(query: &Query, branches: &'a [Branch]) -> Option<&'a Branch> {
    branches
        .iter()
        .find(|b| query.text().contains(&b.name.to_lowercase()))
}

/// First branch (iteration order) whose name or code appears anywhere in the input.
pub fn branch_mentioned_in<'a>(query: &Query, branches: &'a [Branch]) -> Option<&'a Branch> {
    branches.iter().find(|b| mentions(query.text(), b))
}

fn mentions(text: &str, branch: &Branch) -> bool {
    text.contains(&branch.name.to_lowercase()) || text.contains(&branch.code.to_lowercase())
}

/// Branches referenced word by word, in input order. A branch shows up once per
/// word that refers to it, so duplicates are expected.
pub fn branches_referenced<'a>(query: &Query, branches: &'a [Branch]) -> Vec<&'a Branch> {
    query
        .words()
        .iter()
        .flat_map(|w| branches.iter().filter(move |b| mentions(w, b)))
        .collect()
}

/// The first two different branches in `referenced`, if there are two.
pub fn first_two_distinct<'a>(referenced: &[&'a Branch]) -> Option<(&'a Branch, &'a Branch)> {
    let first = *referenced.first()?;
    let second = referenced.iter().find(|b| b.id != first.id)?;
    Some((first, *second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::metrics::tests::branch;

    fn branches() -> Vec<Branch> {
        let mut list = vec![
            branch(1, "Computer Science", 88, 91, 9.2),
            branch(2, "Mechanical", 72, 75, 6.5),
            branch(3, "Civil", 68, 70, 5.9),
            branch(4, "Chemical", 71, 74, 6.8),
        ];
        for (b, code) in list.iter_mut().zip(["CS", "ME", "CE", "CH"]) {
            b.code = code.to_string();
        }
        list
    }

    #[test]
    fn test_parse_normalizes() {
        let q = Query::parse("  Hello, World!  ");
        assert_eq!(q.text(), "hello, world!");
        assert_eq!(q.words(), ["hello", "world"]);
    }

    #[test]
    fn test_parse_empty_and_punctuation_only() {
        assert!(Query::parse("").words().is_empty());
        assert!(Query::parse(" ?! ").words().is_empty());
    }

    #[test]
    fn test_contains_any_matches_inside_words() {
        let q = Query::parse("which branch is best");
        assert!(q.contains_any(&["hi"]));
        assert!(!q.contains_any(&["hello", "hey"]));
    }

    #[test]
    fn test_branch_named_in_is_case_insensitive() {
        let list = branches();
        let found = branch_named_in(&Query::parse("COURSES for CIVIL"), &list).unwrap();
        assert_eq!(found.name, "Civil");
    }

    #[test]
    fn test_code_matches_inside_longer_words() {
        let list = branches();
        assert_eq!(
            branch_mentioned_in(&Query::parse("what about cse?"), &list).unwrap().name,
            "Computer Science"
        );
        // "ch" inside "chemistry" is the Chemical code
        assert_eq!(
            branch_mentioned_in(&Query::parse("chemistry"), &list).unwrap().name,
            "Chemical"
        );
        assert!(branch_mentioned_in(&Query::parse("weather"), &list).is_none());
    }

    #[test]
    fn test_first_branch_in_order_wins() {
        let list = branches();
        // "me" in "tell me" is the Mechanical code, which comes before Civil
        let found = branch_mentioned_in(&Query::parse("tell me about civil"), &list).unwrap();
        assert_eq!(found.name, "Mechanical");
    }

    #[test]
    fn test_branches_referenced_keeps_order_and_duplicates() {
        let list = branches();
        let refs = branches_referenced(&Query::parse("compare cs and cs"), &list);
        let ids: Vec<i64> = refs.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 1]);
        assert!(first_two_distinct(&refs).is_none());
    }

    #[test]
    fn test_first_two_distinct_skips_repeats() {
        let list = branches();
        let refs = branches_referenced(&Query::parse("compare cs cs civil mechanical"), &list);
        let (a, b) = first_two_distinct(&refs).unwrap();
        assert_eq!((a.id, b.id), (1, 3));

        // one token can name several branches: "mechanical" holds "me" and "ch"
        let refs = branches_referenced(&Query::parse("compare computer and mechanical"), &list);
        let ids: Vec<i64> = refs.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }
}
