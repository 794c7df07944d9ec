use crate::Document;
use crate::document::DirectiveLocation;
use crate::lookup::Lookup;
use crate::test_utils;
use crate::walker::NodeKind;
use crate::walker::Walker;

fn walked(doc: &Document) -> (Lookup<'_>, Walker) {
    let lookup = Lookup::new(doc);
    let mut walker = Walker::new();
    walker.walk_executable(&lookup);
    (lookup, walker)
}

/// Index of the first walked field node whose response name is `name`.
fn field_node(lookup: &Lookup<'_>, walker: &Walker, name: &str) -> usize {
    *walker.fields().iter()
        .find(|idx| lookup.name_is(lookup.field(walker.node(**idx).node_ref).response_name(), name))
        .expect("no such field")
}

#[test]
fn selection_set_type_names_follow_field_types() {
    let doc = test_utils::build_document(
        "query q { dog { owner { name } } catOrDog { ... on Cat { extra { string } } } }",
    );
    let (lookup, walker) = walked(&doc);
    let type_names: Vec<Option<&str>> = walker.selection_sets().iter()
        .map(|set| walker.selection_set_type_name(&lookup, *set).map(|name| lookup.str(name)))
        .collect();

    assert_eq!(type_names, vec![
        Some("Query"),
        Some("Dog"),
        Some("Human"),
        Some("CatOrDog"),
        Some("Cat"),
        Some("CatExtra"),
    ]);
}

#[test]
fn selection_set_type_name_is_none_for_unknown_fields() {
    let doc = test_utils::build_document("query q { dog { unknown { name } } }");
    let (lookup, walker) = walked(&doc);
    let innermost = *walker.selection_sets().last().expect("no sets");

    assert!(walker.selection_set_type_name(&lookup, innermost).is_none());
}

#[test]
fn fragment_sets_resolve_from_the_type_condition() {
    let doc = test_utils::build_document(
        "query q { dog { ...f } } fragment f on Dog { owner { name } }",
    );
    let (lookup, walker) = walked(&doc);
    let owner = field_node(&lookup, &walker, "owner");
    let owner_def = walker.field_definition(&lookup, owner).expect("missing definition");

    assert_eq!(lookup.str(lookup.type_name(owner_def.field_type)), "Human");
}

#[test]
fn arguments_definitions_resolve_for_fields_and_directives() {
    let doc = test_utils::build_document(
        "query q { dog { doesKnowCommand(dogCommand: SIT) @skip(if: false) } }",
    );
    let (lookup, walker) = walked(&doc);

    for set in walker.argument_sets() {
        let defs = walker.arguments_definition(&lookup, *set).expect("missing definitions");
        let def = lookup.input_value_definition(defs[0]);
        let owner = walker.parent(*set).expect("no owner");
        match owner.kind {
            NodeKind::Field => assert!(lookup.name_is(def.name, "dogCommand")),
            NodeKind::Directive => assert!(lookup.name_is(def.name, "if")),
            other => panic!("unexpected owner {other:?}"),
        }
    }
    assert_eq!(walker.argument_sets().len(), 2);
}

#[test]
fn fragment_nodes_are_used_by_every_operation_reaching_them() {
    let doc = test_utils::build_document(
        "query a { dog { ...outer } } \
         query b { dog { name } } \
         query c { dog { ... on Dog { ...inner } } } \
         fragment outer on Dog { ...inner } \
         fragment inner on Dog { barkVolume }",
    );
    let (lookup, walker) = walked(&doc);
    let bark_volume = field_node(&lookup, &walker, "barkVolume");

    assert_eq!(walker.node_usage_in_operations(&lookup, bark_volume).as_slice(), &[0, 2]);

    let name = field_node(&lookup, &walker, "name");
    assert_eq!(walker.node_usage_in_operations(&lookup, name).as_slice(), &[1]);
    assert_eq!(walker.operation_definition(name), Some(1));
    assert_eq!(walker.operation_definition(bark_volume), None);
}

#[test]
fn field_path_lists_response_names_outermost_first() {
    let doc = test_utils::build_document("query q { pup: dog { owner { name } } }");
    let (lookup, walker) = walked(&doc);
    let name = field_node(&lookup, &walker, "name");
    let path: Vec<&str> = walker.field_path(&lookup, name).iter()
        .map(|segment| lookup.str(*segment))
        .collect();

    assert_eq!(path, vec!["pup", "owner", "name"]);
}

#[test]
fn directive_locations_come_from_the_attachment_point() {
    let doc = test_utils::build_document(
        "query q @onQuery { dog { ...f @spread ... on Dog @inline { name @skip(if: true) } } } \
         fragment f on Dog @fragmentDefinition { name }",
    );
    let (lookup, walker) = walked(&doc);
    let mut locations: Vec<DirectiveLocation> = walker.directives().iter()
        .filter_map(|directive| walker.directive_location(&lookup, *directive))
        .collect();
    locations.sort_by_key(|location| format!("{location:?}"));

    assert_eq!(locations, vec![
        DirectiveLocation::Field,
        DirectiveLocation::FragmentDefinition,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
        DirectiveLocation::Query,
    ]);
}

#[test]
fn type_system_directive_locations_distinguish_arguments_and_input_fields() {
    let mut doc = Document::new();
    doc.parse_type_system_definition(
        "type Query { a(x: Int @d): Int } input In { y: Int @d }",
    ).expect("parse error");
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_type_system_definition(&lookup);

    let locations: Vec<Option<DirectiveLocation>> = walker.directives().iter()
        .map(|directive| walker.directive_location(&lookup, *directive))
        .collect();
    assert_eq!(locations, vec![
        Some(DirectiveLocation::ArgumentDefinition),
        Some(DirectiveLocation::InputFieldDefinition),
    ]);
}

#[test]
fn fields_containing_directive_reports_owner_types() {
    let mut doc = Document::new();
    doc.parse_type_system_definition(
        "type Query { me: String @fromContext a: Int } \
         interface Node { id: ID @fromContext } \
         type Other { b: Int @deprecated }",
    ).expect("parse error");
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::new();
    walker.walk_type_system_definition(&lookup);

    let found: Vec<(&str, &str)> = walker.fields_containing_directive(&lookup, "fromContext").iter()
        .map(|found| (
            lookup.str(found.type_name),
            lookup.str(lookup.field_definition(found.field_definition).name),
        ))
        .collect();
    assert_eq!(found, vec![("Query", "me"), ("Node", "id")]);
}
