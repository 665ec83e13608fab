/// 計算結果の追記専用ストア。ID は 1 始まりの挿入順。
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
    results: Vec<f32>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を追加し、新しい ID を返す
    pub fn append(&mut self, value: f32) -> u64 {
        self.results.push(value);
        self.results.len() as u64
    }

    /// `1 <= id <= len` の場合のみ値を返す
    pub fn get(&self, id: i64) -> Option<f32> {
        if id < 1 {
            return None;
        }
        let index = usize::try_from(id - 1).ok()?;
        self.results.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
