#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn num_rows(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }
}

#[derive(Debug)]
pub struct Export {
    pub file_name: String,
    pub content: Vec<u8>,
}
