use crate::lookup::IndexPool;
use crate::lookup::Lookup;
use crate::test_utils;

#[test]
fn buffers_are_recycled_empty() {
    let pool = IndexPool::new();
    let mut refs = pool.get();
    refs.extend([1, 2, 3]);
    let capacity = refs.capacity();
    pool.put(refs);

    assert_eq!(pool.available(), 1);
    let recycled = pool.get();
    assert!(recycled.is_empty());
    assert_eq!(recycled.capacity(), capacity);
    assert_eq!(pool.available(), 0);
}

#[test]
fn collected_fields_return_their_buffer_on_drop() {
    let doc = test_utils::build_document("query q { dog { name nickname } }");
    let lookup = Lookup::new(&doc);
    let dog_set = lookup.field(lookup.selection_set(lookup.operation_definitions()[0].selection_set).fields[0])
        .selection_set;
    let dog_name = lookup.object_type_definitions().iter()
        .find(|def| lookup.name_is(def.name, "Dog"))
        .expect("missing Dog")
        .name;

    {
        let fields = lookup.selection_set_collected_fields(dog_set, dog_name);
        assert_eq!(fields.len(), 2);
        assert_eq!(lookup.index_pool().available(), 0);
    }
    assert_eq!(lookup.index_pool().available(), 1);
}
