//! # API Facade
//!
//! [`InventoryApi`] is the single owner of all application state: the
//! product store (collection and edit cursor), the persistence slot, the
//! notifier, the view switcher, and the text of both forms. UI clients drive
//! it through the methods below and read back what to show.
//!
//! ## Flows
//!
//! Each user action runs the same sequence: mutate the store, write the slot,
//! re-project the list, notify, and return to the list region. The business
//! rules for each step live in `commands/*.rs`; this layer sequences them and
//! keeps the UI state (region, forms, cursor, notice) consistent.
//!
//! - create: [`show_add_form`] then [`submit_add`] or [`cancel_add`]
//! - edit: [`begin_edit`] then [`submit_edit`] or [`cancel_edit`]
//! - delete: [`delete`]
//! - card buttons: [`dispatch`] with a typed [`CardAction`](crate::render::CardAction)
//!
//! A validation failure notifies with `error` severity and returns
//! [`StockError::Validation`]; the form stays open with its text intact.
//! Missing update/delete targets notify with `warning` severity and return
//! `Ok`, with nothing written.
//!
//! [`show_add_form`]: InventoryApi::show_add_form
//! [`submit_add`]: InventoryApi::submit_add
//! [`cancel_add`]: InventoryApi::cancel_add
//! [`begin_edit`]: InventoryApi::begin_edit
//! [`submit_edit`]: InventoryApi::submit_edit
//! [`cancel_edit`]: InventoryApi::cancel_edit
//! [`delete`]: InventoryApi::delete
//! [`dispatch`]: InventoryApi::dispatch

use crate::commands;
use crate::error::{Result, StockError};
use crate::inventory::ProductStore;
use crate::model::{Product, ProductId};
use crate::notify::Notifier;
use crate::render::{self, ProductListView, RenderOptions};
use crate::store::ProductSlot;
use crate::validation::ProductForm;
use crate::view::{ViewRegion, ViewSwitcher};
use tracing::debug;

pub struct InventoryApi<S: ProductSlot> {
    store: ProductStore,
    slot: S,
    notifier: Notifier,
    view: ViewSwitcher,
    render_options: RenderOptions,
    add_form: ProductForm,
    edit_form: ProductForm,
    listed: ProductListView,
}

impl<S: ProductSlot> InventoryApi<S> {
    /// Loads the collection from `slot` and renders the initial list.
    pub fn open(slot: S, notifier: Notifier, render_options: RenderOptions) -> Result<Self> {
        let products = slot.load()?;
        debug!(location = %slot.location(), count = products.len(), "inventory opened");
        let listed = render::project(&products, &render_options);
        Ok(Self {
            store: ProductStore::from_products(products),
            slot,
            notifier,
            view: ViewSwitcher::new(),
            render_options,
            add_form: ProductForm::default(),
            edit_form: ProductForm::default(),
            listed,
        })
    }

    pub fn products(&self) -> &[Product] {
        self.store.products()
    }

    pub fn find(&self, id: ProductId) -> Result<&Product> {
        self.store.find_by_id(id).ok_or(StockError::NotFound(id))
    }

    pub fn edit_cursor(&self) -> Option<ProductId> {
        self.store.edit_cursor()
    }

    pub fn region(&self) -> ViewRegion {
        self.view.current()
    }

    pub fn view(&self) -> &ViewSwitcher {
        &self.view
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// The list as of the last mutation.
    pub fn listed(&self) -> &ProductListView {
        &self.listed
    }

    pub fn add_form(&self) -> &ProductForm {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut ProductForm {
        &mut self.add_form
    }

    pub fn edit_form(&self) -> &ProductForm {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut ProductForm {
        &mut self.edit_form
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.store, &self.render_options)
    }

    pub fn show(&self, id: ProductId) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id, &self.render_options)
    }

    pub fn show_add_form(&mut self) -> Result<()> {
        self.view.show_add_form()
    }

    /// Replaces the add form's text with `form` and submits it.
    pub fn submit_add_with(&mut self, form: ProductForm) -> Result<commands::CmdResult> {
        self.add_form = form;
        self.submit_add()
    }

    pub fn submit_add(&mut self) -> Result<commands::CmdResult> {
        let outcome = commands::add::run(&mut self.store, &mut self.slot, &self.add_form);
        self.finish(outcome)
    }

    pub fn cancel_add(&mut self) {
        self.show_list();
    }

    /// Opens the edit form for `id`, filled from the stored record. A missing
    /// product leaves the list on screen and notifies with a warning.
    pub fn begin_edit(&mut self, id: ProductId) -> Result<commands::CmdResult> {
        self.view.begin_edit(id)?;

        let form = self.store.find_by_id(id).map(ProductForm::from_product);
        let Some(form) = form else {
            self.show_list();
            let mut result = commands::CmdResult::default();
            result.add_message(commands::missing_message(id));
            self.announce(&result);
            return Ok(result);
        };

        self.store.set_edit_cursor(id);
        self.edit_form = form;
        Ok(commands::CmdResult::default())
    }

    pub fn submit_edit_with(&mut self, form: ProductForm) -> Result<commands::CmdResult> {
        self.edit_form = form;
        self.submit_edit()
    }

    pub fn submit_edit(&mut self) -> Result<commands::CmdResult> {
        let id = match (self.view.current(), self.store.edit_cursor()) {
            (ViewRegion::Editing(_), Some(id)) => id,
            (from, _) => {
                return Err(StockError::InvalidTransition {
                    from,
                    to: ViewRegion::List,
                })
            }
        };
        let outcome = commands::update::run(&mut self.store, &mut self.slot, id, &self.edit_form);
        self.finish(outcome)
    }

    pub fn cancel_edit(&mut self) {
        self.show_list();
    }

    pub fn delete(&mut self, id: ProductId) -> Result<commands::CmdResult> {
        let outcome = commands::delete::run(&mut self.store, &mut self.slot, id);
        self.finish(outcome)
    }

    pub fn dispatch(&mut self, action: render::CardAction) -> Result<commands::CmdResult> {
        match action.kind {
            render::ActionKind::Edit => self.begin_edit(action.id),
            render::ActionKind::Delete => self.delete(action.id),
        }
    }

    /// Returns to the list: both forms are reset and the edit cursor cleared.
    pub fn show_list(&mut self) {
        self.view.show_list();
        self.store.clear_edit_cursor();
        self.add_form.reset();
        self.edit_form.reset();
    }

    /// Shared tail of every mutating flow. A failed flow (bad input or a slot
    /// that refused the write) keeps the form open over an unchanged store;
    /// success re-renders and goes back to the list.
    fn finish(
        &mut self,
        outcome: Result<commands::CmdResult>,
    ) -> Result<commands::CmdResult> {
        match outcome {
            Ok(mut result) => {
                self.listed = render::project(self.store.products(), &self.render_options);
                self.show_list();
                self.announce(&result);
                result.listed = Some(self.listed.clone());
                Ok(result)
            }
            Err(e) => {
                self.notifier
                    .notify(e.to_string(), commands::MessageLevel::Error);
                Err(e)
            }
        }
    }

    fn announce(&mut self, result: &commands::CmdResult) {
        if let Some(message) = result.headline() {
            self.notifier.notify(message.content.clone(), message.level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::SlotFixture;
    use crate::store::memory::MemorySlot;
    use crate::validation::ValidationError;

    fn api_with(slot: MemorySlot) -> InventoryApi<MemorySlot> {
        InventoryApi::open(slot, Notifier::default(), RenderOptions::default()).unwrap()
    }

    fn form(name: &str, price: &str, quantity: &str) -> ProductForm {
        ProductForm {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
            ..Default::default()
        }
    }

    /// Refuses the next `failures` saves, then behaves like `MemorySlot`.
    struct FlakySlot {
        inner: MemorySlot,
        failures: usize,
    }

    impl FlakySlot {
        fn new(inner: MemorySlot, failures: usize) -> Self {
            Self { inner, failures }
        }
    }

    impl ProductSlot for FlakySlot {
        fn save(&mut self, products: &[Product]) -> Result<()> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(StockError::Io(std::io::Error::other("disk full")));
            }
            self.inner.save(products)
        }

        fn load(&self) -> Result<Vec<Product>> {
            self.inner.load()
        }

        fn location(&self) -> String {
            "flaky".to_string()
        }
    }

    fn flaky_api(inner: MemorySlot) -> InventoryApi<FlakySlot> {
        InventoryApi::open(
            FlakySlot::new(inner, 1),
            Notifier::default(),
            RenderOptions::default(),
        )
        .unwrap()
    }

    fn notice(api: &InventoryApi<MemorySlot>) -> (String, MessageLevel) {
        let n = api.notifier().current().unwrap();
        (n.message.clone(), n.level)
    }

    #[test]
    fn opens_with_stored_products() {
        let api = api_with(SlotFixture::new().with_products(3).build());
        assert_eq!(api.products().len(), 3);
        assert_eq!(api.listed().cards().len(), 3);
        assert_eq!(api.region(), ViewRegion::List);
    }

    #[test]
    fn open_fails_on_corrupt_slot() {
        let result = InventoryApi::open(
            MemorySlot::with_text("{{{"),
            Notifier::default(),
            RenderOptions::default(),
        );
        assert!(matches!(result, Err(StockError::CorruptSlot { .. })));
    }

    #[test]
    fn create_flow_adds_renders_and_returns_to_list() {
        let mut api = api_with(MemorySlot::new());
        api.show_add_form().unwrap();
        assert!(!api.view().add_trigger_visible());

        *api.add_form_mut() = form("Widget", "9.99", "5");
        let result = api.submit_add().unwrap();

        assert_eq!(api.products().len(), 1);
        assert_eq!(api.products()[0].price, 9.99);
        assert_eq!(api.listed().cards()[0].price_text, "$9.99");
        assert_eq!(
            result.listed.as_ref().unwrap().cards()[0].name,
            "Widget"
        );
        assert_eq!(api.region(), ViewRegion::List);
        assert!(api.add_form().is_blank());
        assert_eq!(
            notice(&api),
            ("Product added successfully!".into(), MessageLevel::Success)
        );
        assert_eq!(api.slot().load().unwrap(), api.products());
    }

    #[test]
    fn rejected_add_keeps_form_open_and_state_unchanged() {
        let mut api = api_with(MemorySlot::new());
        api.show_add_form().unwrap();
        let entered = form("Widget", "abc", "5");

        match api.submit_add_with(entered.clone()) {
            Err(StockError::Validation(ValidationError::NotANumber)) => {}
            other => panic!("Expected NotANumber, got {:?}", other),
        }

        assert_eq!(api.region(), ViewRegion::Adding);
        assert_eq!(api.add_form(), &entered);
        assert!(api.products().is_empty());
        assert_eq!(api.slot().saves(), 0);
        assert_eq!(
            notice(&api),
            (
                "Price and Quantity must be valid numbers.".into(),
                MessageLevel::Error
            )
        );
    }

    #[test]
    fn edit_flow_updates_price_only() {
        let slot = SlotFixture::new()
            .with_draft(
                crate::model::ProductDraft::new("Widget", 9.99, 5).with_description("blue"),
            )
            .build();
        let mut api = api_with(slot);
        let id = api.products()[0].id;

        api.begin_edit(id).unwrap();
        assert_eq!(api.region(), ViewRegion::Editing(id));
        assert_eq!(api.edit_cursor(), Some(id));
        assert_eq!(api.edit_form().name, "Widget");
        assert_eq!(api.edit_form().price, "9.99");

        api.edit_form_mut().price = "12.50".into();
        api.submit_edit().unwrap();

        let stored = &api.slot().load().unwrap()[0];
        assert_eq!(stored.price, 12.5);
        assert_eq!(stored.description, "blue");
        assert_eq!(api.edit_cursor(), None);
        assert_eq!(api.region(), ViewRegion::List);
        assert_eq!(api.listed().cards()[0].price_text, "$12.50");
        assert_eq!(notice(&api).0, "Product updated successfully!");
    }

    #[test]
    fn cancel_mid_edit_changes_nothing() {
        let slot = SlotFixture::new().with_products(2).build();
        let text_before = slot.text().map(str::to_string);
        let mut api = api_with(slot);
        let before = api.products().to_vec();
        let id = before[1].id;

        api.begin_edit(id).unwrap();
        api.edit_form_mut().name = "Changed".into();
        api.cancel_edit();

        assert_eq!(api.products(), before.as_slice());
        assert_eq!(api.slot().text().map(str::to_string), text_before);
        assert_eq!(api.slot().saves(), 0);
        assert_eq!(api.edit_cursor(), None);
        assert!(api.edit_form().is_blank());
        assert!(api.view().add_trigger_visible());
    }

    #[test]
    fn cancel_add_resets_form() {
        let mut api = api_with(MemorySlot::new());
        api.show_add_form().unwrap();
        api.add_form_mut().name = "Half typed".into();
        api.cancel_add();

        assert!(api.add_form().is_blank());
        assert_eq!(api.region(), ViewRegion::List);
        assert_eq!(api.slot().saves(), 0);
    }

    #[test]
    fn dispatch_routes_card_actions() {
        let mut api = api_with(
            SlotFixture::new()
                .with_product("First", 1.0, 1)
                .with_product("Second", 2.0, 2)
                .build(),
        );
        let [edit_first, delete_first] = api.listed().cards()[0].actions;

        api.dispatch(delete_first).unwrap();
        assert_eq!(api.products().len(), 1);
        assert_eq!(api.products()[0].name, "Second");
        assert_eq!(notice(&api).0, "Product deleted successfully!");

        // The first product is gone, so its edit button only warns
        let result = api.dispatch(edit_first).unwrap();
        assert_eq!(result.headline().unwrap().level, MessageLevel::Warning);
        assert_eq!(api.region(), ViewRegion::List);
        assert_eq!(api.edit_cursor(), None);
    }

    #[test]
    fn product_removed_while_editing_is_reported() {
        let mut api = api_with(SlotFixture::new().with_products(1).build());
        let id = api.products()[0].id;
        api.begin_edit(id).unwrap();
        // Mutate behind the form's back
        api.store.remove(id);

        let result = api.submit_edit().unwrap();
        assert!(result.affected.is_empty());
        assert_eq!(notice(&api).1, MessageLevel::Warning);
        assert_eq!(api.slot().saves(), 0);
        assert_eq!(api.region(), ViewRegion::List);
    }

    #[test]
    fn submit_edit_requires_edit_region() {
        let mut api = api_with(MemorySlot::new());
        assert!(matches!(
            api.submit_edit(),
            Err(StockError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn cannot_start_edit_from_add_form() {
        let mut api = api_with(SlotFixture::new().with_products(1).build());
        let id = api.products()[0].id;
        api.show_add_form().unwrap();

        assert!(matches!(
            api.begin_edit(id),
            Err(StockError::InvalidTransition { .. })
        ));
        assert_eq!(api.edit_cursor(), None);
        assert_eq!(api.region(), ViewRegion::Adding);
    }

    #[test]
    fn find_reports_missing() {
        let api = api_with(MemorySlot::new());
        assert!(matches!(
            api.find(ProductId(5)),
            Err(StockError::NotFound(ProductId(5)))
        ));
    }

    #[test]
    fn failed_save_on_add_keeps_store_and_allows_retry() {
        let mut api = flaky_api(MemorySlot::new());
        api.show_add_form().unwrap();
        let entered = form("Widget", "9.99", "5");

        assert!(matches!(
            api.submit_add_with(entered.clone()),
            Err(StockError::Io(_))
        ));
        assert!(api.products().is_empty());
        assert!(api.listed().cards().is_empty());
        assert_eq!(api.region(), ViewRegion::Adding);
        assert_eq!(api.add_form(), &entered);
        assert_eq!(api.notifier().current().unwrap().level, MessageLevel::Error);

        api.submit_add().unwrap();
        assert_eq!(api.products().len(), 1);
        assert_eq!(api.slot().load().unwrap().len(), 1);
        assert_eq!(api.region(), ViewRegion::List);
    }

    #[test]
    fn failed_save_on_delete_keeps_product_for_retry() {
        let mut api = flaky_api(SlotFixture::new().with_products(2).build());
        let id = api.products()[0].id;

        assert!(api.delete(id).is_err());
        assert_eq!(api.products().len(), 2);
        assert!(api.find(id).is_ok());

        let result = api.delete(id).unwrap();
        assert_eq!(result.headline().unwrap().level, MessageLevel::Success);
        let stored = api.slot().load().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored.iter().all(|p| p.id != id));
    }

    #[test]
    fn failed_save_on_edit_keeps_old_values() {
        let mut api = flaky_api(SlotFixture::new().with_product("Widget", 9.99, 5).build());
        let id = api.products()[0].id;
        api.begin_edit(id).unwrap();
        api.edit_form_mut().price = "12.50".into();

        assert!(api.submit_edit().is_err());
        assert_eq!(api.products()[0].price, 9.99);
        assert_eq!(api.region(), ViewRegion::Editing(id));
        assert_eq!(api.edit_cursor(), Some(id));

        api.submit_edit().unwrap();
        assert_eq!(api.slot().load().unwrap()[0].price, 12.5);
    }
}
