use crate::document::ByteSliceReference;
use crate::document::Ref;
use crate::lookup::Lookup;
use smallvec::SmallVec;

impl<'doc> Lookup<'doc> {
    /// Whether no fragment other than `fragment` shares its name.
    pub fn is_fragment_name_unique(&self, fragment: Ref) -> bool {
        let name = self.fragment_definition(fragment).name;
        !self.fragment_definitions().iter()
            .enumerate()
            .any(|(idx, other)| idx != fragment && self.bytes_equal(other.name, name))
    }

    /// Whether any spread anywhere in the document names `fragment_name`.
    pub fn is_fragment_used(&self, fragment_name: ByteSliceReference) -> bool {
        self.fragment_spreads().iter()
            .any(|spread| self.bytes_equal(spread.fragment_name, fragment_name))
    }

    /// Whether `set`, or anything reachable from it through fields, inline
    /// fragments and spread fragments, spreads `fragment_name`.
    pub fn selection_set_contains_fragment_spread(
        &self,
        set: Option<Ref>,
        fragment_name: ByteSliceReference,
    ) -> bool {
        let mut visited = SmallVec::<[Ref; 8]>::new();
        self.contains_fragment_spread(set, fragment_name, &mut visited)
    }

    fn contains_fragment_spread(
        &self,
        set: Option<Ref>,
        fragment_name: ByteSliceReference,
        visited: &mut SmallVec<[Ref; 8]>,
    ) -> bool {
        let set = self.selection_set(set);

        let spreads_directly = set.fragment_spreads.iter().any(|spread_ref| {
            self.bytes_equal(self.fragment_spread(*spread_ref).fragment_name, fragment_name)
        });
        if spreads_directly {
            return true;
        }

        for spread_ref in &set.fragment_spreads {
            let spread = self.fragment_spread(*spread_ref);
            let Some((fragment_ref, fragment)) =
                self.fragment_definition_by_name(spread.fragment_name) else {
                continue;
            };
            if visited.contains(&fragment_ref) {
                continue;
            }
            visited.push(fragment_ref);
            if self.contains_fragment_spread(fragment.selection_set, fragment_name, visited) {
                return true;
            }
        }

        set.fields.iter().any(|field_ref| {
            self.contains_fragment_spread(self.field(*field_ref).selection_set, fragment_name, visited)
        }) || set.inline_fragments.iter().any(|inline_ref| {
            self.contains_fragment_spread(
                self.inline_fragment(*inline_ref).selection_set,
                fragment_name,
                visited,
            )
        })
    }

    /// Whether `fragment` reaches a spread of itself.
    pub fn fragment_forms_cycle(&self, fragment: Ref) -> bool {
        let def = self.fragment_definition(fragment);
        self.selection_set_contains_fragment_spread(def.selection_set, def.name)
    }

    /// Appends to `fragments` every fragment definition reachable from `set`
    /// by following spreads, each once.
    pub fn reachable_fragments(&self, set: Option<Ref>, fragments: &mut Vec<Ref>) {
        let set = self.selection_set(set);
        for field_ref in &set.fields {
            self.reachable_fragments(self.field(*field_ref).selection_set, fragments);
        }
        for inline_ref in &set.inline_fragments {
            self.reachable_fragments(self.inline_fragment(*inline_ref).selection_set, fragments);
        }
        for spread_ref in &set.fragment_spreads {
            let spread = self.fragment_spread(*spread_ref);
            let Some((fragment_ref, fragment)) =
                self.fragment_definition_by_name(spread.fragment_name) else {
                continue;
            };
            if fragments.contains(&fragment_ref) {
                continue;
            }
            fragments.push(fragment_ref);
            self.reachable_fragments(fragment.selection_set, fragments);
        }
    }

    /// Whether every type condition directly inside `set` (inline fragments
    /// and spread fragments) is a possible type of `type_name`.
    pub fn fragment_selections_are_possible(
        &self,
        type_name: ByteSliceReference,
        set: Option<Ref>,
    ) -> bool {
        let mut possible_types = Vec::new();
        self.possible_selection_types(type_name, &mut possible_types);

        let set = self.selection_set(set);
        let inline_fragments_possible = set.inline_fragments.iter().all(|inline_ref| {
            match self.inline_fragment(*inline_ref).type_condition {
                Some(cond) => self.names_contain(&possible_types, self.type_name(cond)),
                None => true,
            }
        });

        inline_fragments_possible && set.fragment_spreads.iter().all(|spread_ref| {
            let spread = self.fragment_spread(*spread_ref);
            self.fragment_definition_by_name(spread.fragment_name)
                .is_some_and(|(_, fragment)| {
                    self.names_contain(&possible_types, self.fragment_type_condition(fragment))
                })
        })
    }
}
