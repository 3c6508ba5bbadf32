use ahash::AHashMap;

/// Per-run mapping from grouping key to accumulator.
///
/// Iteration yields entries in first-insertion order; finalization relies on
/// this to break ties between equal totals.
#[derive(Debug, Clone)]
pub struct StatsTable<A> {
    index: AHashMap<String, usize>,
    entries: Vec<(String, A)>,
}

impl<A> Default for StatsTable<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> StatsTable<A> {
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&A> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.entries.iter().map(|(k, a)| (k.as_str(), a))
    }
}

impl<A: Default> StatsTable<A> {
    pub fn entry_or_default(&mut self, key: String) -> &mut A {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, A::default()));
                i
            }
        };
        &mut self.entries[i].1
    }
}

impl<A> IntoIterator for StatsTable<A> {
    type Item = (String, A);
    type IntoIter = std::vec::IntoIter<(String, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<A: Default> FromIterator<(String, A)> for StatsTable<A> {
    fn from_iter<I: IntoIterator<Item = (String, A)>>(iter: I) -> Self {
        let mut table = StatsTable::new();
        for (key, acc) in iter {
            *table.entry_or_default(key) = acc;
        }
        table
    }
}
