use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_validation::Document;
use libgraphql_validation::Lookup;
use libgraphql_validation::Validator;
use libgraphql_validation::Walker;
use libgraphql_validation::validation::Rule;
use libgraphql_validation::validation::RuleName;
use libgraphql_validation::validation::rules;

const SCHEMA: &str = r#"
schema { query: Query }

enum DogCommand { SIT, DOWN, HEEL }
input ComplexInput { name: String, owner: String }

interface Pet { name: String! }

type Dog implements Pet {
    name: String!
    nickname: String
    barkVolume: Int
    doesKnowCommand(dogCommand: DogCommand!): Boolean!
    isHousetrained(atOtherHomes: Boolean): Boolean!
    owner: Human
}

type Cat implements Pet {
    name: String!
    meowVolume: Int
}

type Human { name: String! pets: [Pet] }

union CatOrDog = Cat | Dog

type Query {
    dog: Dog
    pet: Pet
    catOrDog: CatOrDog
    findDog(complex: ComplexInput): Dog
}

directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
"#;

const QUERY: &str = r#"
query dogQuery($atOtherHomes: Boolean, $command: DogCommand!, $withOwner: Boolean!) {
    dog {
        ...dogFields
        isHousetrained(atOtherHomes: $atOtherHomes)
        doesKnowCommand(dogCommand: $command)
        owner @include(if: $withOwner) {
            name
            pets { ...petFields }
        }
    }
    catOrDog {
        ... on Cat { name meowVolume }
        ... on Dog { name barkVolume }
    }
    findDog(complex: { name: "Fido", owner: "Jane" }) { ...dogFields }
}

fragment dogFields on Dog { name nickname barkVolume }
fragment petFields on Pet { name ... on Dog { nickname } }
"#;

fn build_document() -> Document {
    let mut doc = Document::new();
    doc.parse_type_system_definition(SCHEMA).expect("schema parse error");
    doc.parse_executable_definition(QUERY).expect("query parse error");
    doc
}

fn walk(c: &mut Criterion) {
    let doc = build_document();
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::with_capacity(256);

    c.bench_function("walk_executable", |b| {
        b.iter(|| {
            walker.walk_executable(black_box(&lookup));
            black_box(walker.nodes().len())
        })
    });
}

fn validate(c: &mut Criterion) {
    let doc = build_document();
    let lookup = Lookup::new(&doc);
    let mut walker = Walker::with_capacity(256);
    walker.walk_executable(&lookup);

    let mut group = c.benchmark_group("validate");

    let validator = Validator::default();
    group.bench_function("all_rules", |b| {
        b.iter(|| black_box(validator.validate(&lookup, &walker)))
    });

    for (name, rule) in [
        (RuleName::Fragments, rules::fragments as Rule),
        (RuleName::FieldSelectionMerging, rules::field_selection_merging),
        (RuleName::Values, rules::values),
        (RuleName::AllVariablesUsed, rules::all_variables_used),
    ] {
        group.bench_function(name.to_string(), |b| {
            b.iter(|| black_box(rule(&lookup, &walker)))
        });
    }

    group.finish();
}

fn request_cycle(c: &mut Criterion) {
    let mut doc = Document::new();
    doc.parse_type_system_definition(SCHEMA).expect("schema parse error");
    let validator = Validator::default();
    let mut walker = Walker::with_capacity(256);

    c.bench_function("parse_walk_validate", |b| {
        b.iter(|| {
            doc.reset_executable();
            doc.parse_executable_definition(black_box(QUERY)).expect("query parse error");
            let lookup = Lookup::new(&doc);
            walker.walk_executable(&lookup);
            black_box(validator.validate(&lookup, &walker))
        })
    });
}

criterion_group!(benches, walk, validate, request_cycle);
criterion_main!(benches);
