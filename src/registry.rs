use ahash::AHashMap;

use crate::descriptor::DescriptorId;

/// Objects built during one render pass, keyed by descriptor id.
#[derive(Debug)]
pub struct Registry<H> {
    objects: AHashMap<DescriptorId, H>,
}

impl<H: Copy> Registry<H> {
    pub fn new() -> Self {
        Self {
            objects: AHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: &DescriptorId) -> Option<H> {
        self.objects.get(id).copied()
    }

    /// Returns the object previously registered under `id`, if any.
    pub fn insert(&mut self, id: DescriptorId, object: H) -> Option<H> {
        self.objects.insert(id, object)
    }
}

impl<H: Copy> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.insert(DescriptorId::from("1:1"), 10u32), None);
        assert_eq!(registry.insert(DescriptorId::from(0), 11), None);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&DescriptorId::from("1:1")), Some(10));
        assert_eq!(registry.get(&DescriptorId::from("0")), Some(11));
        assert_eq!(registry.get(&DescriptorId::from("2")), None);
    }

    #[test]
    fn reinsert_replaces() {
        let mut registry = Registry::new();

        registry.insert(DescriptorId::from(3), 'a');
        let previous = registry.insert(DescriptorId::from("3"), 'b');

        assert_eq!(previous, Some('a'));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&DescriptorId::from(3)), Some('b'));
    }
}
