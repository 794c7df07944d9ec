mod invoker_tests;

const DOCUMENTS_SCHEMA: &str = r#"
    type Document { title: String }
    type Query {
        documents(user: String!): [Document]
            @addArgumentFromContext(name: "user", contextKey: "user")
        title: String
    }
"#;
