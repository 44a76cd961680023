use crate::{
    database::CatalogStore,
    error::{AppError, Result},
    models::{Inquiry, InquiryAcknowledgement, InquiryInput, NewInquiry},
    utils::validation::{
        ValidationErrors, is_valid_email, max_chars, optional_id, optional_text, required_text,
    },
};

pub const SUCCESS_MESSAGE: &str =
    "Your inquiry has been sent successfully! We will get back to you soon.";

const INVALID_PRODUCT: &str = "The selected product is invalid.";
const MAX_LENGTH: usize = 255;
const MAX_MESSAGE_LENGTH: usize = 5000;

/// Checks every text field of the submission on top of `errors` already
/// found for the product reference.
fn validate(
    input: &InquiryInput,
    product_id: Option<i64>,
    mut errors: ValidationErrors,
) -> std::result::Result<NewInquiry, ValidationErrors> {
    let name = required_text(&mut errors, "name", input.name.as_ref());
    let email = required_text(&mut errors, "email", input.email.as_ref());
    let subject = required_text(&mut errors, "subject", input.subject.as_ref());
    let message = required_text(&mut errors, "message", input.message.as_ref());
    let company = optional_text(&mut errors, "company", input.company.as_ref());
    let country = optional_text(&mut errors, "country", input.country.as_ref());

    if let Some(ref email) = email {
        if !is_valid_email(email) {
            errors.add("email", "The email field must be a valid email address.");
        }
    }

    max_chars(&mut errors, "name", name.as_deref(), MAX_LENGTH);
    max_chars(&mut errors, "email", email.as_deref(), MAX_LENGTH);
    max_chars(&mut errors, "company", company.as_deref(), MAX_LENGTH);
    max_chars(&mut errors, "country", country.as_deref(), MAX_LENGTH);
    max_chars(&mut errors, "subject", subject.as_deref(), MAX_LENGTH);
    max_chars(&mut errors, "message", message.as_deref(), MAX_MESSAGE_LENGTH);

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
            Ok(NewInquiry {
                name,
                email,
                company,
                country,
                subject,
                message,
                product_id,
            })
        }
        _ => Err(errors),
    }
}

fn rejected(input: &InquiryInput, errors: ValidationErrors) -> AppError {
    AppError::Validation(errors.with_old(serde_json::to_value(input).unwrap_or_default()))
}

pub async fn submit_inquiry(
    store: &dyn CatalogStore,
    input: InquiryInput,
) -> Result<InquiryAcknowledgement> {
    let mut errors = ValidationErrors::default();
    let product_id = optional_id(
        &mut errors,
        "product_id",
        input.product_id.as_ref(),
        INVALID_PRODUCT,
    );
    if let Some(id) = product_id {
        if !store.product_exists(id).await? {
            errors.add("product_id", INVALID_PRODUCT);
        }
    }

    let inquiry = validate(&input, product_id, errors).map_err(|errors| rejected(&input, errors))?;

    // The product can disappear between the check and the insert.
    let inquiry = match store.insert_inquiry(inquiry).await {
        Ok(inquiry) => inquiry,
        Err(AppError::BadRequest(_)) => {
            let mut errors = ValidationErrors::default();
            errors.add("product_id", INVALID_PRODUCT);
            return Err(rejected(&input, errors));
        }
        Err(e) => return Err(e),
    };

    tracing::info!(inquiry_id = inquiry.id, "Inquiry received");

    Ok(InquiryAcknowledgement {
        success: SUCCESS_MESSAGE.to_string(),
    })
}

pub async fn find_inquiry(store: &dyn CatalogStore, id: i64) -> Result<Inquiry> {
    store
        .find_inquiry(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        database::MemoryStore,
        models::{InquiryStatus, NewCategory, NewProduct},
    };

    fn input(name: &str, email: &str, subject: &str, message: &str) -> InquiryInput {
        InquiryInput {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
            ..InquiryInput::default()
        }
    }

    fn field_errors(err: AppError) -> ValidationErrors {
        match err {
            AppError::Validation(errors) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn valid_submission_is_stored_as_new() {
        let store = MemoryStore::new();
        let ack = submit_inquiry(&store, input("Ann", "ann@x.com", "Bulk", "Need 500 units"))
            .await
            .unwrap();
        assert_eq!(ack.success, SUCCESS_MESSAGE);

        let stored = find_inquiry(&store, 1).await.unwrap();
        assert_eq!(stored.name, "Ann");
        assert_eq!(stored.email, "ann@x.com");
        assert_eq!(stored.subject, "Bulk");
        assert_eq!(stored.message, "Need 500 units");
        assert_eq!(stored.company, None);
        assert_eq!(stored.country, None);
        assert_eq!(stored.product_id, None);
        assert_eq!(stored.status, InquiryStatus::New);
    }

    #[tokio::test]
    async fn blank_required_fields_are_all_reported() {
        let store = MemoryStore::new();
        let err = submit_inquiry(&store, input("", "bad", "", ""))
            .await
            .unwrap_err();

        let errors = field_errors(err);
        for field in ["name", "email", "subject", "message"] {
            assert!(errors.has(field), "missing error for {}", field);
        }
        assert_eq!(
            errors.errors["email"],
            vec!["The email field must be a valid email address."]
        );
        assert_eq!(errors.old["email"], "bad");
        assert!(find_inquiry(&store, 1).await.is_err());
    }

    #[tokio::test]
    async fn absent_fields_are_required() {
        let store = MemoryStore::new();
        let err = submit_inquiry(&store, InquiryInput::default()).await.unwrap_err();

        let errors = field_errors(err);
        assert_eq!(errors.errors["name"], vec!["The name field is required."]);
        assert_eq!(errors.errors["email"], vec!["The email field is required."]);
        assert!(!errors.has("company"));
    }

    #[tokio::test]
    async fn unknown_product_is_a_field_error() {
        let store = MemoryStore::new();
        let mut submission = input("Ann", "ann@x.com", "Bulk", "Need 500 units");
        submission.product_id = Some(99i64.into());

        let errors = field_errors(submit_inquiry(&store, submission).await.unwrap_err());
        assert_eq!(
            errors.errors["product_id"],
            vec!["The selected product is invalid."]
        );
        assert_eq!(errors.errors.len(), 1);
    }

    #[tokio::test]
    async fn product_link_and_optional_fields_are_kept() {
        let store = MemoryStore::new();
        let hats = store.create_category(NewCategory::new("Hats")).await.unwrap();
        let fedora = store
            .create_product(NewProduct::new("Vintage Fedora", hats.id))
            .await
            .unwrap();

        let mut submission = input(" Ann ", "ann@x.com", "Bulk", "Need 500 units");
        submission.company = Some("Acme Trading".into());
        submission.country = Some("   ".into());
        submission.product_id = Some(fedora.id.to_string().as_str().into());
        submit_inquiry(&store, submission).await.unwrap();

        let stored = find_inquiry(&store, 1).await.unwrap();
        assert_eq!(stored.name, "Ann");
        assert_eq!(stored.company.as_deref(), Some("Acme Trading"));
        assert_eq!(stored.country, None);
        assert_eq!(stored.product_id, Some(fedora.id));
    }

    #[tokio::test]
    async fn overlong_values_are_rejected() {
        let store = MemoryStore::new();
        let submission = input(&"a".repeat(256), "ann@x.com", "Bulk", &"m".repeat(5001));

        let errors = field_errors(submit_inquiry(&store, submission).await.unwrap_err());
        assert!(errors.has("name"));
        assert!(errors.has("message"));
        assert!(!errors.has("subject"));
    }

    #[tokio::test]
    async fn blank_product_reference_means_none() {
        let store = MemoryStore::new();
        let mut submission = input("Ann", "ann@x.com", "Bulk", "Need 500 units");
        submission.product_id = Some("".into());
        submit_inquiry(&store, submission).await.unwrap();

        let stored = find_inquiry(&store, 1).await.unwrap();
        assert_eq!(stored.product_id, None);
    }

    #[tokio::test]
    async fn malformed_product_reference_is_reported_with_other_fields() {
        let store = MemoryStore::new();
        let mut submission = input("", "ann@x.com", "Bulk", "Need 500 units");
        submission.product_id = Some("abc".into());

        let errors = field_errors(submit_inquiry(&store, submission).await.unwrap_err());
        assert_eq!(errors.errors["product_id"], vec![INVALID_PRODUCT]);
        assert_eq!(errors.errors["name"], vec!["The name field is required."]);
        assert_eq!(errors.old["product_id"], "abc");
    }

    #[tokio::test]
    async fn mistyped_text_field_is_a_field_error() {
        let store = MemoryStore::new();
        let mut submission = input("Ann", "ann@x.com", "Bulk", "Need 500 units");
        submission.name = Some(5i64.into());

        let errors = field_errors(submit_inquiry(&store, submission).await.unwrap_err());
        assert_eq!(errors.errors["name"], vec!["The name field must be a string."]);
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.old["name"], 5);
    }

    #[test]
    fn validate_normalizes_whitespace() {
        let inquiry = validate(
            &input("  Ann", "ann@x.com ", " Bulk ", "Hi"),
            None,
            ValidationErrors::default(),
        )
        .unwrap();
        assert_eq!(inquiry.name, "Ann");
        assert_eq!(inquiry.email, "ann@x.com");
        assert_eq!(inquiry.subject, "Bulk");
    }
}
