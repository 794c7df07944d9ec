use crate::middleware::BaseSchemaMiddleware;
use crate::middleware::ContextMiddleware;
use crate::middleware::InvokerConfig;
use crate::middleware::Middleware;
use crate::middleware::MiddlewareError;
use crate::middleware::RequestContext;
use crate::middleware::ValidationMiddleware;
use crate::middleware::tests::DOCUMENTS_SCHEMA;
use crate::middleware::validate_request;
use crate::validation::RuleName;

fn user_context() -> RequestContext {
    let mut ctx = RequestContext::new();
    ctx.insert("user".to_string(), "jsmith@example.org".to_string());
    ctx
}

#[test]
fn context_arguments_satisfy_required_arguments() {
    let middlewares: [&dyn Middleware; 2] = [&BaseSchemaMiddleware, &ContextMiddleware];
    let result = validate_request(
        DOCUMENTS_SCHEMA,
        "query q($skipTitle: Boolean!) { documents { title @skip(if: $skipTitle) } }",
        &user_context(),
        &middlewares,
        &InvokerConfig::default(),
    ).expect("validate_request");
    assert!(result.is_valid(), "{result:?}");
}

#[test]
fn without_the_rewrite_the_argument_is_missing() {
    let result = validate_request(
        DOCUMENTS_SCHEMA,
        "{ documents { title } }",
        &user_context(),
        &[&BaseSchemaMiddleware],
        &InvokerConfig::default(),
    ).expect("validate_request");
    assert_eq!(
        result.violation().map(|violation| violation.rule_name),
        Some(RuleName::RequiredArguments),
    );
}

#[test]
fn validation_middleware_turns_violations_into_errors() {
    let err = validate_request(
        DOCUMENTS_SCHEMA,
        "{ documents }",
        &user_context(),
        &[&BaseSchemaMiddleware, &ContextMiddleware, &ValidationMiddleware::default()],
        &InvokerConfig::default(),
    ).expect_err("expected an invalid request");
    assert!(matches!(err, MiddlewareError::Invalid(_)));
    assert_eq!(
        err.to_string(),
        "query is invalid: RuleName: FieldSelections, Description: CompositeFieldMustHaveSelections",
    );
}

#[test]
fn oversized_documents_are_rejected_before_parsing() {
    let config = InvokerConfig { max_document_bytes: 8, ..InvokerConfig::default() };
    let err = validate_request(
        DOCUMENTS_SCHEMA,
        "{ documents { title } }",
        &user_context(),
        &[],
        &config,
    ).expect_err("expected an oversized request");
    assert!(matches!(err, MiddlewareError::DocumentTooLarge { size: 23, limit: 8 }));
}

#[test]
fn parse_errors_propagate() {
    let err = validate_request(
        DOCUMENTS_SCHEMA,
        "{ documents { title }",
        &user_context(),
        &[],
        &InvokerConfig::default(),
    ).expect_err("expected a parse error");
    assert!(matches!(err, MiddlewareError::DocumentBuildError(_)));
}

#[test]
fn size_limit_applies_to_the_query_only() {
    let query = "{ documents { title } }";
    let config = InvokerConfig { max_document_bytes: query.len(), ..InvokerConfig::default() };
    assert!(DOCUMENTS_SCHEMA.len() > config.max_document_bytes);

    let middlewares: [&dyn Middleware; 2] = [&BaseSchemaMiddleware, &ContextMiddleware];
    let result = validate_request(
        DOCUMENTS_SCHEMA,
        query,
        &user_context(),
        &middlewares,
        &config,
    ).expect("request within the limit");
    assert!(result.is_valid(), "{result:?}");
}
