pub fn len(&self) -> usize {
    self.items.len()
}
