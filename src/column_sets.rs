use std::fmt;

use itertools::Itertools;

use crate::units::{ColumnIndex, SetId, Width};


/// Which disjoint set each column of the row currently being carved belongs to.
///
/// Two columns share a set id exactly when a carved path is known to join them. Set ids are
/// handed out in increasing order starting at 1 and are never reused within one generation run.
///
/// Merging relabels every member of one set, which is O(width). Rows are narrow and there are at
/// most `width - 1` merges a row, so no union-find structure is needed.
#[derive(Clone, PartialEq, Eq)]
pub struct ColumnSets {
    ids: Vec<Option<SetId>>,
    last_allocated: usize,
}

impl fmt::Debug for ColumnSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels = self.ids
            .iter()
            .map(|id| id.map_or_else(|| String::from("_"), |SetId(n)| n.to_string()))
            .join(" ");
        write!(f, "ColumnSets :: [{}]", labels)
    }
}

impl Default for ColumnSets {
    fn default() -> ColumnSets {
        ColumnSets::new()
    }
}

impl ColumnSets {
    pub fn new() -> ColumnSets {
        ColumnSets {
            ids: vec![],
            last_allocated: 0,
        }
    }

    /// Starts a run: every column gets its own fresh set.
    pub fn initialize(&mut self, width: Width) {
        self.last_allocated = 0;
        self.ids.clear();
        for _ in 0..width.0 {
            let id = self.allocate();
            self.ids.push(Some(id));
        }
    }

    /// Carries the sets over into the next row. Columns that kept their id from the previous row
    /// stay in that set, any column without one (detached, or new because the row is wider)
    /// gets a fresh set of its own.
    pub fn propagate(&mut self, width: Width) {
        self.ids.resize(width.0, None);
        for col in 0..width.0 {
            if self.ids[col].is_none() {
                let id = self.allocate();
                self.ids[col] = Some(id);
            }
        }
    }

    /// Forget the set of a column that the next row will not be connected to.
    pub fn detach(&mut self, col: ColumnIndex) {
        self.ids[col.0] = None;
    }

    /// Moves every column in `b`'s set into `a`'s set.
    pub fn merge(&mut self, a: ColumnIndex, b: ColumnIndex) {
        let (keep, replace) = (self.ids[a.0], self.ids[b.0]);
        if keep == replace {
            return;
        }
        for id in self.ids.iter_mut().filter(|id| **id == replace) {
            *id = keep;
        }
    }

    #[inline]
    pub fn same_set(&self, a: ColumnIndex, b: ColumnIndex) -> bool {
        self.ids[a.0] == self.ids[b.0]
    }

    /// The set a column belongs to. Only valid between `initialize`/`propagate` and the next
    /// `detach` of that column.
    #[inline]
    pub fn set_of(&self, col: ColumnIndex) -> Option<SetId> {
        self.ids.get(col.0).cloned().and_then(|id| id)
    }

    #[inline]
    pub fn width(&self) -> Width {
        Width(self.ids.len())
    }

    /// How many distinct sets the row has.
    pub fn distinct_sets(&self) -> usize {
        self.ids.iter().filter_map(|id| *id).unique().count()
    }

    fn allocate(&mut self) -> SetId {
        self.last_allocated += 1;
        SetId(self.last_allocated)
    }
}
