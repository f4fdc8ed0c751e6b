//! Form handlers: validate a form, render the outcome into its error slot, and
//! hand back the request (or draft) a valid form produces.

use goofycoin_core::{
    CoinDraft, CreateUserPayload, ErrorTarget, FormState, InputField, SelectList, TransferDraft,
    UserSummary, ValidationResult, validate_amount, validate_coin_issuer, validate_receiver,
    validate_username,
};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::dispatch::{DispatchFailure, DispatchOutcome, DispatchTask, Dispatcher, log_outcome};
use crate::transport::{HttpTransport, Transport};

/// The user listing could not be loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("user listing request failed: {0}")]
    Dispatch(DispatchFailure),
    #[error("malformed user listing: {0}")]
    Decode(String),
}

/// Drives the create-user, create-coin and transfer forms.
#[derive(Debug, Clone)]
pub struct FormController<T = HttpTransport> {
    config: ClientConfig,
    dispatcher: Dispatcher<T>,
}

impl FormController<HttpTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> FormController<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// Validate the username and, if it passes, build the user-creation POST.
    ///
    /// The returned task has not started; the caller decides when to drive it.
    pub fn create_user<F: FormState + ?Sized>(
        &self,
        form: &mut F,
    ) -> ValidationResult<DispatchTask> {
        let result = validate_username(&form.value(InputField::CreateUser));
        let username = render(form, ErrorTarget::CreateUser, result)?;

        let payload = CreateUserPayload::from(username);
        let dispatcher = self.dispatcher.clone();
        let url = self.config.user_endpoint();
        tracing::info!("Dispatching user creation for {} to {}", payload.user_name, url);

        Ok(async move {
            let outcome = dispatcher.post(&url, &payload).await;
            log_outcome("POST", &url, &outcome);
            outcome
        }
        .boxed_local())
    }

    /// Validate a coin-creation request from the selected user.
    ///
    /// The issuer check runs first; the amount is not looked at unless it
    /// passes.
    pub fn create_coin<F: FormState + ?Sized>(&self, form: &mut F) -> ValidationResult<CoinDraft> {
        let result = validate_coin_issuer(form.selection(SelectList::SelectUser).as_ref())
            .and_then(|()| validate_amount(&form.value(InputField::CreateCoin)))
            .map(|amount| CoinDraft { amount });
        render(form, ErrorTarget::CreateCoin, result)
    }

    /// Validate a transfer from the selected user to the selected receiver.
    pub fn create_tx<F: FormState + ?Sized>(
        &self,
        form: &mut F,
    ) -> ValidationResult<TransferDraft> {
        let result = validate_receiver(form.selection(SelectList::Receiver)).and_then(|receiver| {
            let sender = form.selection(SelectList::SelectUser).map(|s| s.text);
            let amount = validate_amount(&form.value(InputField::PayAmount))?;
            Ok(TransferDraft {
                sender,
                receiver: receiver.text,
                receiver_id: receiver.value,
                amount,
            })
        });
        render(form, ErrorTarget::PayCoin, result)
    }

    /// GET the user listing used to populate the selection lists.
    pub fn fetch_users(&self) -> LocalBoxFuture<'static, Result<Vec<UserSummary>, DirectoryError>> {
        let dispatcher = self.dispatcher.clone();
        let url = self.config.user_endpoint();

        async move {
            let outcome = dispatcher.get(&url).await;
            log_outcome("GET", &url, &outcome);
            match outcome {
                DispatchOutcome::Success(resp) => resp
                    .json::<Vec<UserSummary>>()
                    .map_err(|e| DirectoryError::Decode(e.to_string())),
                DispatchOutcome::Failure(failure) => Err(DirectoryError::Dispatch(failure)),
            }
        }
        .boxed_local()
    }
}

/// Write the first failing rule's message into `target`, or clear it.
fn render<F: FormState + ?Sized, V>(
    form: &mut F,
    target: ErrorTarget,
    result: ValidationResult<V>,
) -> ValidationResult<V> {
    match &result {
        Ok(_) => form.clear_error(target),
        Err(err) => {
            tracing::debug!("Rejected {} ({:?}): {}", target.as_str(), err.category(), err);
            form.set_error(target, &err.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use goofycoin_core::{MemoryForm, Selection, ValidationError};
    use proptest::prelude::*;

    use crate::transport::{HttpResponse, TransportError};

    #[derive(Debug, Clone, PartialEq)]
    enum Sent {
        Post(String, serde_json::Value),
        Get(String),
    }

    /// Records every request and answers with a canned result.
    #[derive(Clone)]
    struct Recording {
        sent: Rc<RefCell<Vec<Sent>>>,
        reply: Result<HttpResponse, TransportError>,
    }

    impl Recording {
        fn replying(reply: Result<HttpResponse, TransportError>) -> Self {
            Self {
                sent: Rc::new(RefCell::new(Vec::new())),
                reply,
            }
        }

        fn ok() -> Self {
            Self::replying(Ok(HttpResponse::new(200, "")))
        }

        fn sent(&self) -> Vec<Sent> {
            self.sent.borrow().clone()
        }
    }

    impl Transport for Recording {
        async fn post_json(
            &self,
            url: &str,
            body: serde_json::Value,
        ) -> Result<HttpResponse, TransportError> {
            self.sent.borrow_mut().push(Sent::Post(url.to_string(), body));
            self.reply.clone()
        }

        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.sent.borrow_mut().push(Sent::Get(url.to_string()));
            self.reply.clone()
        }
    }

    fn controller(transport: Recording) -> FormController<Recording> {
        FormController::with_transport(ClientConfig::default(), transport)
    }

    fn goofy() -> Selection {
        Selection::new("u-goofy", "Goofy")
    }

    #[tokio::test]
    async fn valid_username_clears_error_and_posts_once() {
        let transport = Recording::ok();
        let controller = controller(transport.clone());
        let mut form = MemoryForm::new().with_value(InputField::CreateUser, "bob12");
        form.set_error(ErrorTarget::CreateUser, "no space allowed");

        let task = controller.create_user(&mut form).unwrap();
        assert_eq!(form.error(ErrorTarget::CreateUser), None);
        // Lazy: nothing is sent until the task is driven.
        assert!(transport.sent().is_empty());

        let outcome = task.await;
        assert!(outcome.is_success());
        assert_eq!(
            transport.sent(),
            vec![Sent::Post(
                "http://localhost:8080/user".to_string(),
                serde_json::json!({ "userName": "bob12" })
            )]
        );
    }

    #[test]
    fn invalid_username_renders_error_and_builds_no_request() {
        let transport = Recording::ok();
        let controller = controller(transport.clone());
        let mut form = MemoryForm::new().with_value(InputField::CreateUser, "bob 12");

        let err = controller.create_user(&mut form).err();
        assert_eq!(err, Some(ValidationError::Whitespace));
        assert_eq!(form.error(ErrorTarget::CreateUser), Some("no space allowed"));
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn empty_username_asks_for_one() {
        let controller = controller(Recording::ok());
        let mut form = MemoryForm::new();

        assert_eq!(
            controller.create_user(&mut form).err(),
            Some(ValidationError::MissingUsername)
        );
        assert_eq!(
            form.error(ErrorTarget::CreateUser),
            Some("please enter a username")
        );
    }

    #[tokio::test]
    async fn failed_post_still_resolves_to_a_value() {
        let transport = Recording::replying(Err(TransportError::Network("refused".to_string())));
        let controller = controller(transport);
        let mut form = MemoryForm::new().with_value(InputField::CreateUser, "alice");

        let outcome = controller.create_user(&mut form).unwrap().await;
        assert!(matches!(
            outcome,
            DispatchOutcome::Failure(DispatchFailure::Transport(_))
        ));
        // Transport failures never reach the form.
        assert_eq!(form.error(ErrorTarget::CreateUser), None);
    }

    #[test]
    fn only_goofy_can_create_coins() {
        let controller = controller(Recording::ok());

        for selection in [Some(Selection::new("u-1", "goofy")), Some(Selection::new("u-2", "Alice")), None] {
            let mut form = MemoryForm::new().with_value(InputField::CreateCoin, "10");
            if let Some(selection) = selection {
                form.select(SelectList::SelectUser, selection);
            }
            assert_eq!(
                controller.create_coin(&mut form).unwrap_err(),
                ValidationError::NotCoinIssuer
            );
            assert_eq!(
                form.error(ErrorTarget::CreateCoin),
                Some("Only goofy can create coin")
            );
        }
    }

    #[test]
    fn issuer_check_runs_before_amount_checks() {
        let controller = controller(Recording::ok());
        let mut form = MemoryForm::new()
            .with_selection(SelectList::SelectUser, Selection::new("u-2", "Alice"))
            .with_value(InputField::CreateCoin, "");

        assert_eq!(
            controller.create_coin(&mut form).unwrap_err(),
            ValidationError::NotCoinIssuer
        );
    }

    #[test]
    fn goofy_coin_amount_rules_apply_in_order() {
        let controller = controller(Recording::ok());
        let cases = [
            ("", "enter an amount"),
            ("1 0", "no space allowed"),
            ("10.0", "no fractions allowed"),
            ("ten", "enter a numeric value"),
        ];

        for (amount, message) in cases {
            let mut form = MemoryForm::new()
                .with_selection(SelectList::SelectUser, goofy())
                .with_value(InputField::CreateCoin, amount);
            assert!(controller.create_coin(&mut form).is_err(), "{amount:?}");
            assert_eq!(form.error(ErrorTarget::CreateCoin), Some(message));
        }
    }

    #[test]
    fn valid_coin_clears_error_and_sends_nothing() {
        let transport = Recording::ok();
        let controller = controller(transport.clone());
        let mut form = MemoryForm::new()
            .with_selection(SelectList::SelectUser, goofy())
            .with_value(InputField::CreateCoin, "50");
        form.set_error(ErrorTarget::CreateCoin, "enter an amount");

        let draft = controller.create_coin(&mut form).unwrap();
        assert_eq!(draft.amount.value(), 50.0);
        assert_eq!(form.error(ErrorTarget::CreateCoin), None);
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn receiver_sentinel_aborts_before_amount_checks() {
        let controller = controller(Recording::ok());
        let mut form = MemoryForm::new()
            .with_selection(SelectList::SelectUser, goofy())
            .with_selection(SelectList::Receiver, Selection::new("0", "select receiver"))
            .with_value(InputField::PayAmount, "not a number.");

        assert_eq!(
            controller.create_tx(&mut form).unwrap_err(),
            ValidationError::NoReceiver
        );
        assert_eq!(
            form.error(ErrorTarget::PayCoin),
            Some("please select a receiver")
        );
    }

    #[test]
    fn fractional_transfer_amount_is_rejected() {
        let controller = controller(Recording::ok());
        let mut form = MemoryForm::new()
            .with_selection(SelectList::SelectUser, Selection::new("u-2", "Alice"))
            .with_selection(SelectList::Receiver, Selection::new("u-3", "Bob"))
            .with_value(InputField::PayAmount, "5.");

        assert_eq!(
            controller.create_tx(&mut form).unwrap_err(),
            ValidationError::Fractional
        );
        assert_eq!(form.error(ErrorTarget::PayCoin), Some("no fractions allowed"));
    }

    #[test]
    fn valid_transfer_resolves_names() {
        let transport = Recording::ok();
        let controller = controller(transport.clone());
        let mut form = MemoryForm::new()
            .with_selection(SelectList::SelectUser, Selection::new("u-2", "Alice"))
            .with_selection(SelectList::Receiver, Selection::new("u-3", "Bob"))
            .with_value(InputField::PayAmount, "7");
        form.set_error(ErrorTarget::PayCoin, "enter an amount");

        let draft = controller.create_tx(&mut form).unwrap();
        assert_eq!(draft.sender.as_deref(), Some("Alice"));
        assert_eq!(draft.receiver, "Bob");
        assert_eq!(draft.receiver_id, "u-3");
        assert_eq!(draft.amount.as_str(), "7");
        assert_eq!(form.error(ErrorTarget::PayCoin), None);
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn errors_stay_on_their_own_form() {
        let controller = controller(Recording::ok());
        let mut form = MemoryForm::new().with_value(InputField::CreateUser, "bob!");

        let _ = controller.create_user(&mut form);
        let _ = controller.create_coin(&mut form);

        assert_eq!(
            form.error(ErrorTarget::CreateUser),
            Some("only numbers and alphabets are allowed")
        );
        assert_eq!(
            form.error(ErrorTarget::CreateCoin),
            Some("Only goofy can create coin")
        );
        assert_eq!(form.error(ErrorTarget::PayCoin), None);
    }

    #[tokio::test]
    async fn fetch_users_decodes_listing() {
        let listing = r#"[{"uuid":"6ba7b810-9dad-11d1-80b4-00c04fd430c8","name":"Goofy"}]"#;
        let transport = Recording::replying(Ok(HttpResponse::new(200, listing)));
        let controller = controller(transport.clone());

        let users = controller.fetch_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Goofy");
        assert_eq!(
            transport.sent(),
            vec![Sent::Get("http://localhost:8080/user".to_string())]
        );
    }

    #[tokio::test]
    async fn fetch_users_reports_bad_bodies_and_statuses() {
        let garbled = controller(Recording::replying(Ok(HttpResponse::new(200, "nope"))));
        assert!(matches!(
            garbled.fetch_users().await,
            Err(DirectoryError::Decode(_))
        ));

        let down = controller(Recording::replying(Ok(HttpResponse::new(503, ""))));
        assert!(matches!(
            down.fetch_users().await,
            Err(DirectoryError::Dispatch(DispatchFailure::Status(_)))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: every non-empty alphanumeric username clears the error
        /// and produces exactly one POST of `{"userName": name}`.
        #[test]
        fn alphanumeric_username_posts_exactly_once(name in "[0-9A-Za-z]{1,32}") {
            let transport = Recording::ok();
            let controller = controller(transport.clone());
            let mut form = MemoryForm::new().with_value(InputField::CreateUser, name.as_str());
            form.set_error(ErrorTarget::CreateUser, "please enter a username");

            let task = controller.create_user(&mut form);
            prop_assert!(task.is_ok());
            prop_assert_eq!(form.error(ErrorTarget::CreateUser), None);

            if let Ok(task) = task {
                let outcome = block_on(task);
                prop_assert!(outcome.is_success());
            }
            prop_assert_eq!(
                transport.sent(),
                vec![Sent::Post(
                    controller.config().user_endpoint(),
                    serde_json::json!({ "userName": name })
                )]
            );
        }
    }
}
