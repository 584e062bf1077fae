pub mod entity {
    pub type Name = String;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Person {
        pub name: Name,
    }

    impl Person {
        pub fn new(name: impl Into<Name>) -> Person {
            Person { name: name.into() }
        }
    }
}


pub mod relation {
    use std::collections::HashMap;
    use serde::Deserialize;
    use super::entity::Name;

    /// Directed name -> names relation. `A -> B` says nothing about `B -> A`.
    #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
    #[serde(transparent)]
    pub struct RelationMap(pub HashMap<Name, Vec<Name>>);

    impl RelationMap {
        pub fn new() -> RelationMap {
            RelationMap(HashMap::new())
        }

        pub fn with(mut self, name: &str, others: &[&str]) -> RelationMap {
            self.insert(name, others);
            self
        }

        pub fn insert(&mut self, name: &str, others: &[&str]) {
            self.0.insert(name.to_string(), others.iter().map(|o| o.to_string()).collect());
        }

        pub fn get(&self, name: &str) -> &[Name] {
            self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
        }

        pub fn contains(&self, name: &str, other: &str) -> bool {
            self.get(name).iter().any(|n| n == other)
        }

        pub fn degree(&self, name: &str) -> usize {
            self.get(name).len()
        }

        pub fn iter(&self) -> impl Iterator<Item = (&Name, &Vec<Name>)> {
            self.0.iter()
        }
    }
}

pub mod condition {
    use super::relation::RelationMap;

    pub type Weight = usize;

    pub struct Condition {
        pub friends: RelationMap,
        pub flagged: RelationMap,
    }

    impl Condition {
        pub fn new(friends: RelationMap, flagged: RelationMap) -> Condition {
            Condition { friends, flagged }
        }

        /// Declared friends plus declared flagged partners.
        pub fn weight(&self, name: &str) -> Weight {
            self.friends.degree(name) + self.flagged.degree(name)
        }

        pub fn is_flagged(&self, name: &str, other: &str) -> bool {
            self.flagged.contains(name, other)
        }
    }
}
