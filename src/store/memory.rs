use super::*;

/// The phonebook itself: an ordered list of contacts that lives for the whole session.
///
/// Contacts have no identity beyond their position. The number shown to the
/// user (the display index) is always `position + 1`, so it shifts whenever an
/// earlier contact is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookStore {
    data: Vec<Contact>,
}

impl Default for PhonebookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PhonebookStore {
    /// A phonebook holding the six seed contacts.
    pub fn new() -> Self {
        let data = SEED_CONTACTS
            .iter()
            .map(|(name, email)| Contact::new(*name, *email))
            .collect();
        Self { data }
    }

    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.data
    }

    pub fn iter(&self) -> PhonebookIter<'_> {
        PhonebookIter {
            inner: &self.data,
            idx: 0,
        }
    }

    pub fn get(&self, display_index: i64) -> Option<&Contact> {
        let position = self.position(display_index, "view").ok()?;
        self.data.get(position)
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.data.push(contact);
    }

    /// Resolves a display index to a position in the list.
    ///
    /// `verb` names the operation for the empty-phonebook error. The empty
    /// check comes first so an empty phonebook never reports a bad index.
    pub fn position(&self, display_index: i64, verb: &'static str) -> Result<usize, AppError> {
        if self.data.is_empty() {
            return Err(AppError::EmptyStore(verb));
        }

        match usize::try_from(display_index) {
            Ok(index) if (1..=self.data.len()).contains(&index) => Ok(index - 1),
            _ => Err(AppError::InvalidIndex(display_index)),
        }
    }

    /// Removes and returns the contact at `display_index`. Later contacts move up by one.
    pub fn remove_contact(&mut self, display_index: i64) -> Result<Contact, AppError> {
        let position = self.position(display_index, "remove")?;
        Ok(self.data.remove(position))
    }

    pub fn edit_contact(
        &mut self,
        display_index: i64,
        update: ContactUpdate,
    ) -> Result<(), AppError> {
        let position = self.position(display_index, "edit")?;
        self.data[position].apply(update);
        Ok(())
    }
}

/// Yields each contact together with its display index.
pub struct PhonebookIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for PhonebookIter<'a> {
    type Item = (usize, &'a Contact);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some((self.idx, contact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(contacts: &[(&str, &str)]) -> PhonebookStore {
        let mut store = PhonebookStore::empty();
        for (name, email) in contacts {
            store.add_contact(Contact::new(*name, *email));
        }
        store
    }

    #[test]
    fn new_store_is_seeded_in_order() {
        let store = PhonebookStore::new();
        assert_eq!(store.len(), 6);

        let seeded: Vec<(&str, &str)> = store
            .iter()
            .map(|(_, c)| (c.name.as_str(), c.email.as_str()))
            .collect();
        assert_eq!(seeded, SEED_CONTACTS.to_vec());
    }

    #[test]
    fn iter_yields_one_based_indices() {
        let store = store_of(&[("A", "a"), ("B", "b"), ("C", "c")]);
        let indices: Vec<usize> = store.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn add_then_remove_restores_store() -> Result<(), AppError> {
        let mut store = PhonebookStore::new();
        let before = store.clone();

        store.add_contact(Contact::new("O'Brien, Pat", "pat@example.com"));
        let removed = store.remove_contact(store.len() as i64)?;

        assert_eq!(removed, Contact::new("O'Brien, Pat", "pat@example.com"));
        assert_eq!(store, before);
        Ok(())
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut store = PhonebookStore::empty();
        store.add_contact(Contact::new("Sam", "sam@x.com"));
        store.add_contact(Contact::new("Sam", "sam@x.com"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_middle_shifts_later_contacts() -> Result<(), AppError> {
        let mut store = store_of(&[("A", "a@x"), ("B", "b@x"), ("C", "c@x")]);

        store.remove_contact(2)?;

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1), Some(&Contact::new("A", "a@x")));
        assert_eq!(store.get(2), Some(&Contact::new("C", "c@x")));
        assert_eq!(store.get(3), None);
        Ok(())
    }

    #[test]
    fn empty_store_reports_empty_not_invalid_index() {
        let mut store = PhonebookStore::empty();

        let err = store.remove_contact(1).unwrap_err();
        assert!(matches!(err, AppError::EmptyStore("remove")));

        let err = store
            .edit_contact(1, ContactUpdate::from_input("X".into(), "x@x".into()))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyStore("edit")));

        assert!(store.is_empty());
    }

    #[test]
    fn index_bounds_are_enforced() {
        let mut store = store_of(&[("A", "a"), ("B", "b"), ("C", "c")]);
        let before = store.clone();
        let n = store.len() as i64;

        for bad in [0, n + 1, -1, i64::MIN, i64::MAX] {
            let err = store.remove_contact(bad).unwrap_err();
            assert!(matches!(err, AppError::InvalidIndex(v) if v == bad));

            let err = store.edit_contact(bad, ContactUpdate::default()).unwrap_err();
            assert!(matches!(err, AppError::InvalidIndex(v) if v == bad));
        }
        assert_eq!(store, before);

        assert_eq!(store.position(1, "edit").unwrap(), 0);
        assert_eq!(store.position(n, "edit").unwrap(), 2);
        assert!(store.remove_contact(n).is_ok());
        assert!(store.remove_contact(1).is_ok());
        assert_eq!(store.contacts(), &[Contact::new("B", "b")]);
    }

    #[test]
    fn edit_keeps_unset_fields() -> Result<(), AppError> {
        let mut store = store_of(&[("Alice", "a@x.com")]);

        store.edit_contact(1, ContactUpdate::from_input("".into(), "b@y.com".into()))?;
        assert_eq!(store.get(1), Some(&Contact::new("Alice", "b@y.com")));

        store.edit_contact(1, ContactUpdate::from_input("Alicia".into(), "".into()))?;
        assert_eq!(store.get(1), Some(&Contact::new("Alicia", "b@y.com")));
        Ok(())
    }

    #[test]
    fn edit_does_not_move_contact() -> Result<(), AppError> {
        let mut store = store_of(&[("A", "a"), ("B", "b"), ("C", "c")]);
        store.edit_contact(2, ContactUpdate::from_input("Bee".into(), "bee".into()))?;

        let names: Vec<&str> = store.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "Bee", "C"]);
        Ok(())
    }
}
