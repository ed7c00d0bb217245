/// A text buffer with a byte cursor that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.text, self.cursor);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let next = next_char_boundary(&self.text, self.cursor);
        self.text.drain(self.cursor..next);
    }

    pub fn left(&mut self) {
        self.cursor = prev_char_boundary(&self.text, self.cursor);
    }

    pub fn right(&mut self) {
        self.cursor = next_char_boundary(&self.text, self.cursor);
    }

    /// Start of the current line.
    pub fn home(&mut self) {
        self.cursor = match self.text[..self.cursor].rfind('\n') {
            Some(i) => i + 1,
            None => 0,
        };
    }

    /// End of the current line.
    pub fn end(&mut self) {
        self.cursor = match self.text[self.cursor..].find('\n') {
            Some(i) => self.cursor + i,
            None => self.text.len(),
        };
    }

    pub fn up(&mut self) {
        let (row, col) = self.row_col();
        if row == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.offset_of(row - 1, col);
    }

    pub fn down(&mut self) {
        let (row, col) = self.row_col();
        if row + 1 >= self.text.split('\n').count() {
            self.cursor = self.text.len();
            return;
        }
        self.cursor = self.offset_of(row + 1, col);
    }

    /// Zero-based (line, column-in-chars) of the cursor.
    pub fn row_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (row, before[line_start..].chars().count())
    }

    fn offset_of(&self, row: usize, col: usize) -> usize {
        let rows: Vec<&str> = self.text.split('\n').collect();
        let line = rows.get(row).copied().unwrap_or("");
        let row_start: usize = rows[..row.min(rows.len())].iter().map(|l| l.len() + 1).sum();
        let col_bytes = line
            .char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        row_start + col_bytes
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut p = pos - 1;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos + 1;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}
