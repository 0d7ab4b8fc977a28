use std::{collections::HashMap, fmt};

// a rudimentary implementation
#[derive(Debug, Clone)]
pub struct Table<T> {
    cols: Vec<String>,
    col_idx: HashMap<String, usize>,
    pub rows: Vec<Vec<T>>,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Table<T> {
        Table {
            cols: Vec::new(),
            col_idx: HashMap::new(),
            rows: Vec::new(),
        }
    }
    pub fn set_columns(&mut self, cols: Vec<String>) {
        self.cols = cols;
        self.col_idx.clear();
        // with duplicate column names, the last one wins lookups
        for (i, col) in self.cols.iter().enumerate() {
            self.col_idx.insert(col.clone(), i);
        }
    }
    pub fn push_row(&mut self, row: Vec<T>) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }
    pub fn columns(&self) -> &[String] {
        &self.cols
    }
    pub fn get_val_at(&self, i: usize, col: &str) -> Option<&T> {
        let j = self.col_idx.get(col)?;
        self.rows.get(i)?.get(*j)
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Header, a rule, then one line per row with each cell centred under its column.
impl<T: fmt::Display> fmt::Display for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cols.join(" | "))?;
        let rule = self.cols.iter().map(|c| c.len() + 3).sum::<usize>();
        writeln!(f, "{}", "-".repeat(rule.saturating_sub(3)))?;
        for row in &self.rows {
            let cells: Vec<String> = self
                .cols
                .iter()
                .zip(row)
                .map(|(col, val)| format!("{:^w$}", val.to_string(), w = col.len()))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Yields every combination of `bits` booleans in counting order,
/// most significant bit first.
pub fn bitwise_counter(bits: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1usize << bits).map(move |n| (0..bits).rev().map(|i| n >> i & 1 == 1).collect())
}
