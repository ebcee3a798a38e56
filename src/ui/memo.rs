/// Value derived from a key, recomputed only when the key changes.
#[derive(Debug)]
pub struct Memo<K, V> {
    cached: Option<(K, V)>,
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Memo { cached: None }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        if !matches!(&self.cached, Some((k, _)) if *k == key) {
            self.cached = None;
        }

        let (_, value) = self.cached.get_or_insert_with(|| {
            let value = compute(&key);
            (key, value)
        });
        value
    }
}
