use crate::Document;

pub(crate) const TEST_SCHEMA: &str = r#"
schema {
    query: Query
}

input ComplexInput { name: String, owner: String }
input ComplexNonOptionalInput { name: String! }

type Query {
    human: Human
    pet: Pet
    dog: Dog
    cat: Cat
    catOrDog: CatOrDog
    dogOrHuman: DogOrHuman
    humanOrAlien: HumanOrAlien
    arguments: ValidArguments
    findDog(complex: ComplexInput): Dog
    findDogNonOptional(complex: ComplexNonOptionalInput): Dog
    booleanList(booleanListArg: [Boolean!]): Boolean
    extra: Extra
}

type ValidArguments {
    multipleReqs(x: Int!, y: Int!): Int!
    booleanArgField(booleanArg: Boolean): Boolean
    floatArgField(floatArg: Float): Float
    intArgField(intArg: Int): Int
    nonNullBooleanArgField(nonNullBooleanArg: Boolean!): Boolean!
    booleanListArgField(booleanListArg: [Boolean]!): [Boolean]
    optionalNonNullBooleanArgField(optionalBooleanArg: Boolean! = false): Boolean!
}

enum DogCommand { SIT, DOWN, HEEL }

type Dog implements Pet {
    name: String!
    nickname: String
    barkVolume: Int
    doesKnowCommand(dogCommand: DogCommand!): Boolean!
    isHousetrained(atOtherHomes: Boolean): Boolean!
    owner: Human
    extra: DogExtra
    extras: [DogExtra]
    mustExtra: DogExtra!
    mustExtras: [DogExtra]!
    mustMustExtras: [DogExtra!]!
}

type DogExtra {
    string: String
    strings: [String]
    mustStrings: [String]!
    bool: Int
}

interface Sentient {
    name: String!
}

interface Pet {
    name: String!
}

type Alien implements Sentient {
    name: String!
    homePlanet: String
}

type Human implements Sentient {
    name: String!
}

enum CatCommand { JUMP }

type Cat implements Pet {
    name: String!
    nickname: String
    doesKnowCommand(catCommand: CatCommand!): Boolean!
    meowVolume: Int
    extra: CatExtra
}

type CatExtra {
    string: String
    string2: String
    strings: [String]
    mustStrings: [String]!
    bool: Boolean
}

union CatOrDog = Cat | Dog
union DogOrHuman = Dog | Human
union HumanOrAlien = Human | Alien
union Extra = CatExtra | DogExtra

directive @inline on INLINE_FRAGMENT
directive @spread on FRAGMENT_SPREAD
directive @fragmentDefinition on FRAGMENT_DEFINITION
directive @onQuery on QUERY
directive @onMutation on MUTATION
directive @onSubscription on SUBSCRIPTION

scalar Int
scalar Float
scalar String
scalar Boolean
scalar ID

directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE
"#;

/// Lowers [`TEST_SCHEMA`] followed by `query` into a fresh document.
pub(crate) fn build_document(query: &str) -> Document {
    build_document_with_schema(TEST_SCHEMA, query)
}

pub(crate) fn build_document_with_schema(schema: &str, query: &str) -> Document {
    let mut doc = Document::new();
    doc.parse_type_system_definition(schema).expect("schema parse error");
    doc.parse_executable_definition(query).expect("query parse error");
    doc
}
