use crate::document::ByteSliceReference;
use crate::document::Ref;
use crate::document::SelectionSet;
use crate::lookup::IndexPool;
use crate::lookup::Lookup;
use smallvec::SmallVec;

type FragmentPath = SmallVec<[Ref; 8]>;

/// A selection set paired with the name of the type it selects from.
#[derive(Clone, Copy, Debug)]
pub struct TypedSet {
    pub selection_set: Option<Ref>,
    pub type_name: ByteSliceReference,
}

/// Fields a selection set contributes to one concrete type, with fragments
/// flattened. Returned by [`Lookup::selection_set_collected_fields`].
///
/// The backing buffer goes back to the lookup's [`IndexPool`] on drop.
#[derive(Debug)]
pub struct CollectedFields<'a> {
    pool: &'a IndexPool,
    refs: Vec<Ref>,
    next: usize,
    cycle: bool,
}
impl CollectedFields<'_> {
    pub fn as_slice(&self) -> &[Ref] {
        &self.refs
    }

    /// Whether flattening ran into a fragment that spreads itself. The
    /// cyclic spread contributes nothing.
    pub fn has_cycle(&self) -> bool {
        self.cycle
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}
impl Iterator for CollectedFields<'_> {
    type Item = Ref;

    fn next(&mut self) -> Option<Ref> {
        let field = self.refs.get(self.next).copied()?;
        self.next += 1;
        Some(field)
    }
}
impl Drop for CollectedFields<'_> {
    fn drop(&mut self) {
        self.pool.put(std::mem::take(&mut self.refs));
    }
}

/// Type-conditioned selection sets reachable from a selection set whose
/// condition differs from the set's own type. Returned by
/// [`Lookup::selection_set_differing_selection_sets`].
#[derive(Debug)]
pub struct DifferingSelectionSets<'a, 'doc> {
    lookup: &'a Lookup<'doc>,
    set_refs: Vec<Ref>,
    type_refs: Vec<Ref>,
    next: usize,
    cycle: bool,
}
impl DifferingSelectionSets<'_, '_> {
    pub fn has_cycle(&self) -> bool {
        self.cycle
    }

    pub fn len(&self) -> usize {
        self.set_refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set_refs.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<TypedSet> {
        let set_ref = *self.set_refs.get(idx)?;
        Some(TypedSet {
            selection_set: Some(set_ref),
            type_name: self.lookup.type_name(self.type_refs[idx]),
        })
    }
}
impl Iterator for DifferingSelectionSets<'_, '_> {
    type Item = TypedSet;

    fn next(&mut self) -> Option<TypedSet> {
        let typed_set = self.get(self.next)?;
        self.next += 1;
        Some(typed_set)
    }
}
impl Drop for DifferingSelectionSets<'_, '_> {
    fn drop(&mut self) {
        self.lookup.pool.put(std::mem::take(&mut self.set_refs));
        self.lookup.pool.put(std::mem::take(&mut self.type_refs));
    }
}

impl<'doc> Lookup<'doc> {
    /// Flattens the fields `set` selects on `type_name`: its own fields, then
    /// those of inline fragments without a type condition or conditioned on
    /// `type_name`, then those of spread fragments declared on `type_name`.
    pub fn selection_set_collected_fields(
        &self,
        set: Option<Ref>,
        type_name: ByteSliceReference,
    ) -> CollectedFields<'_> {
        let mut refs = self.pool.get();
        let mut path = FragmentPath::new();
        let mut expanded = FragmentPath::new();
        let cycle = self.collect_fields(
            self.selection_set(set),
            type_name,
            &mut path,
            &mut expanded,
            &mut refs,
        );
        CollectedFields {
            pool: &self.pool,
            refs,
            next: 0,
            cycle,
        }
    }

    fn collect_fields(
        &self,
        set: &SelectionSet,
        type_name: ByteSliceReference,
        path: &mut FragmentPath,
        expanded: &mut FragmentPath,
        refs: &mut Vec<Ref>,
    ) -> bool {
        let mut cycle = false;
        refs.extend_from_slice(&set.fields);

        for inline_ref in &set.inline_fragments {
            let inline = self.inline_fragment(*inline_ref);
            let applies = inline.type_condition
                .is_none_or(|cond| self.bytes_equal(self.type_name(cond), type_name));
            if applies {
                cycle |= self.collect_fields(
                    self.selection_set(inline.selection_set),
                    type_name,
                    path,
                    expanded,
                    refs,
                );
            }
        }

        for spread_ref in &set.fragment_spreads {
            let spread = self.fragment_spread(*spread_ref);
            let Some((fragment_ref, fragment)) =
                self.fragment_definition_by_name(spread.fragment_name) else {
                continue;
            };
            if !self.bytes_equal(self.fragment_type_condition(fragment), type_name) {
                continue;
            }
            if path.contains(&fragment_ref) {
                cycle = true;
                continue;
            }
            // A fragment spread again contributes the same fields.
            if expanded.contains(&fragment_ref) {
                continue;
            }
            expanded.push(fragment_ref);
            path.push(fragment_ref);
            cycle |= self.collect_fields(
                self.selection_set(fragment.selection_set),
                type_name,
                path,
                expanded,
                refs,
            );
            path.pop();
        }

        cycle
    }

    /// Collects the inline-fragment and fragment-definition selection sets
    /// reachable from `set` whose type condition is not `ignore_type_name`.
    ///
    /// Inline fragments without a type condition are looked through.
    /// Spread fragments are always looked through, whether or not their own
    /// set was collected.
    pub fn selection_set_differing_selection_sets<'a>(
        &'a self,
        set: Option<Ref>,
        ignore_type_name: ByteSliceReference,
    ) -> DifferingSelectionSets<'a, 'doc> {
        let mut iter = DifferingSelectionSets {
            lookup: self,
            set_refs: self.pool.get(),
            type_refs: self.pool.get(),
            next: 0,
            cycle: false,
        };
        let mut path = FragmentPath::new();
        let mut expanded = FragmentPath::new();
        iter.cycle = self.collect_differing_sets(
            self.selection_set(set),
            ignore_type_name,
            &mut path,
            &mut expanded,
            &mut iter.set_refs,
            &mut iter.type_refs,
        );
        iter
    }

    fn collect_differing_sets(
        &self,
        set: &SelectionSet,
        ignore_type_name: ByteSliceReference,
        path: &mut FragmentPath,
        expanded: &mut FragmentPath,
        set_refs: &mut Vec<Ref>,
        type_refs: &mut Vec<Ref>,
    ) -> bool {
        let mut cycle = false;

        for inline_ref in &set.inline_fragments {
            let inline = self.inline_fragment(*inline_ref);
            match inline.type_condition {
                None => {
                    cycle |= self.collect_differing_sets(
                        self.selection_set(inline.selection_set),
                        ignore_type_name,
                        path,
                        expanded,
                        set_refs,
                        type_refs,
                    );
                },
                Some(cond) => {
                    if !self.bytes_equal(self.type_name(cond), ignore_type_name)
                        && let Some(inline_set) = inline.selection_set {
                        set_refs.push(inline_set);
                        type_refs.push(cond);
                    }
                },
            }
        }

        for spread_ref in &set.fragment_spreads {
            let spread = self.fragment_spread(*spread_ref);
            let Some((fragment_ref, fragment)) =
                self.fragment_definition_by_name(spread.fragment_name) else {
                continue;
            };
            if path.contains(&fragment_ref) {
                cycle = true;
                continue;
            }
            if expanded.contains(&fragment_ref) {
                continue;
            }
            expanded.push(fragment_ref);
            if !self.bytes_equal(self.fragment_type_condition(fragment), ignore_type_name)
                && let Some(fragment_set) = fragment.selection_set {
                set_refs.push(fragment_set);
                type_refs.push(fragment.type_condition);
            }
            path.push(fragment_ref);
            cycle |= self.collect_differing_sets(
                self.selection_set(fragment.selection_set),
                ignore_type_name,
                path,
                expanded,
                set_refs,
                type_refs,
            );
            path.pop();
        }

        cycle
    }

    /// Whether two typed selection sets produce responses of the same shape.
    ///
    /// Collected fields are compared pairwise in order. Each pair must share
    /// a response name. Leaf-typed pairs must have equal declared types and
    /// composite pairs must recursively have the same shape.
    pub fn selection_sets_are_of_same_response_shape(
        &self,
        left: TypedSet,
        right: TypedSet,
    ) -> bool {
        let left_fields = self.selection_set_collected_fields(left.selection_set, left.type_name);
        let right_fields = self.selection_set_collected_fields(right.selection_set, right.type_name);
        if left_fields.len() != right_fields.len() {
            return false;
        }

        for (left_ref, right_ref) in left_fields.as_slice().iter().zip(right_fields.as_slice()) {
            let left_field = self.field(*left_ref);
            let right_field = self.field(*right_ref);
            if !self.bytes_equal(left_field.response_name(), right_field.response_name()) {
                return false;
            }
            if self.name_is(left_field.name, "__typename")
                && self.name_is(right_field.name, "__typename") {
                continue;
            }

            let Some(left_type) = self.field_type(left.type_name, left_field.name) else {
                return false;
            };
            let Some(right_type) = self.field_type(right.type_name, right_field.name) else {
                return false;
            };
            let left_type_name = self.type_name(left_type);
            let right_type_name = self.type_name(right_type);

            if self.is_leaf_type(left_type_name) && self.is_leaf_type(right_type_name) {
                if !self.types_are_equal(left_type, right_type) {
                    return false;
                }
                continue;
            }

            let same_shape = self.selection_sets_are_of_same_response_shape(
                TypedSet {
                    selection_set: left_field.selection_set,
                    type_name: left_type_name,
                },
                TypedSet {
                    selection_set: right_field.selection_set,
                    type_name: right_type_name,
                },
            );
            if !same_shape {
                return false;
            }
        }

        true
    }

    pub fn response_names_are_equal(&self, left: Ref, right: Ref) -> bool {
        self.bytes_equal(self.field(left).response_name(), self.field(right).response_name())
    }

    /// Whether two fields are written identically: same name and alias,
    /// the same arguments in any order, and deep-equal selection sets.
    pub fn fields_deep_equal(&self, left: Ref, right: Ref) -> bool {
        let left = self.field(left);
        let right = self.field(right);

        let aliases_equal = match (left.alias, right.alias) {
            (Some(left_alias), Some(right_alias)) => self.bytes_equal(left_alias, right_alias),
            (None, None) => true,
            _ => false,
        };

        aliases_equal
            && self.bytes_equal(left.name, right.name)
            && self.arguments_are_equal(
                self.argument_set(left.argument_set),
                self.argument_set(right.argument_set),
            )
            && self.selection_sets_deep_equal(left.selection_set, right.selection_set)
    }

    /// Item-by-item equality of two selection sets. Spreads compare by
    /// fragment name without being followed.
    pub fn selection_sets_deep_equal(&self, left: Option<Ref>, right: Option<Ref>) -> bool {
        let left = self.selection_set(left);
        let right = self.selection_set(right);

        let fields_equal = left.fields.len() == right.fields.len()
            && left.fields.iter().zip(&right.fields)
                .all(|(l, r)| self.fields_deep_equal(*l, *r));
        if !fields_equal {
            return false;
        }

        let inline_fragments_equal = left.inline_fragments.len() == right.inline_fragments.len()
            && left.inline_fragments.iter().zip(&right.inline_fragments).all(|(l, r)| {
                let l = self.inline_fragment(*l);
                let r = self.inline_fragment(*r);
                let conditions_equal = match (l.type_condition, r.type_condition) {
                    (Some(l_cond), Some(r_cond)) => self.types_are_equal(l_cond, r_cond),
                    (None, None) => true,
                    _ => false,
                };
                conditions_equal && self.selection_sets_deep_equal(l.selection_set, r.selection_set)
            });
        if !inline_fragments_equal {
            return false;
        }

        left.fragment_spreads.len() == right.fragment_spreads.len()
            && left.fragment_spreads.iter().zip(&right.fragment_spreads).all(|(l, r)| {
                self.bytes_equal(
                    self.fragment_spread(*l).fragment_name,
                    self.fragment_spread(*r).fragment_name,
                )
            })
    }
}
