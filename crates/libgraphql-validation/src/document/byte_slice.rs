use std::collections::HashMap;

/// An `(offset, length)` window into a [`Document`](crate::Document)'s
/// [`Interner`].
///
/// Two references name the same text iff their *contents* match, which is
/// only observable through [`Lookup::bytes_equal`](crate::Lookup::bytes_equal).
/// It does not implement `PartialEq` for that reason.
#[derive(Clone, Copy, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct ByteSliceReference {
    offset: usize,
    length: usize,
}
impl ByteSliceReference {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Append-only byte buffer backing every name and string literal in a
/// document.
///
/// Identical byte strings are stored once while the dedup index is warm. The
/// index is not part of a serialized snapshot, so a decoded interner appends
/// fresh copies until it sees a string twice.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct Interner {
    bytes: Vec<u8>,

    #[serde(skip)]
    index: HashMap<Vec<u8>, ByteSliceReference>,
}
impl Interner {
    pub fn get(&self, reference: ByteSliceReference) -> &[u8] {
        &self.bytes[reference.offset..reference.end()]
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn put(&mut self, bytes: &[u8]) -> ByteSliceReference {
        if let Some(existing) = self.index.get(bytes) {
            return *existing;
        }
        let reference = ByteSliceReference::new(self.bytes.len(), bytes.len());
        self.bytes.extend_from_slice(bytes);
        self.index.insert(bytes.to_vec(), reference);
        reference
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
        self.index.retain(|_, reference| reference.end() <= len);
    }
}
