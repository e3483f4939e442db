//! Cart actions: reading the visitor's cart and adding or removing lines.
//!
//! Every action resolves the cart through the visitor identity: an
//! authenticated user id wins over the anonymous session cart id, but the
//! session cart id must be present either way.

use serde::Serialize;

use crate::cache::Revalidate;
use crate::domain::cart::{Cart, CartItem, CartOwner, FormattedCartPrices, NewCart, UpdateCart};
use crate::domain::money::format_money;
use crate::domain::product::Product;
use crate::forms::cart::CartItemForm;
use crate::repository::{CartReader, CartWriter, ProductReader};
use crate::services::actions::{ActionError, ActionResult};

/// Identity of the visitor performing a cart action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visitor {
    /// Value of the session cart cookie, if the browser sent one.
    pub session_cart_id: Option<String>,
    /// Subject of the authenticated user, if signed in.
    pub user_id: Option<String>,
}

impl Visitor {
    pub fn new(session_cart_id: Option<String>, user_id: Option<String>) -> Self {
        Self {
            session_cart_id,
            user_id,
        }
    }

    fn require_session(&self) -> Result<&str, ActionError> {
        self.session_cart_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(ActionError::MissingSession)
    }

    /// Cart owner for this visitor; fails when the session cart id is missing.
    pub fn owner(&self) -> Result<CartOwner, ActionError> {
        let session_cart_id = self.require_session()?;
        Ok(CartOwner::resolve(self.user_id.as_deref(), session_cart_id))
    }
}

/// Fetch the cart of `visitor`, `None` when they have not added anything yet.
pub fn get_my_cart<R>(repo: &R, visitor: &Visitor) -> Result<Option<Cart>, ActionError>
where
    R: CartReader + ?Sized,
{
    let owner = visitor.owner()?;
    Ok(repo.find_cart(&owner)?)
}

/// Fetch the cart of `visitor` with every amount formatted for display.
pub fn load_cart_view<R>(repo: &R, visitor: &Visitor) -> Result<Option<CartView>, ActionError>
where
    R: CartReader + ?Sized,
{
    Ok(get_my_cart(repo, visitor)?.map(CartView::from))
}

/// Add one line to the visitor's cart, or bump the quantity of an existing one.
pub fn add_item_to_cart<R, C>(
    repo: &R,
    pages: &C,
    visitor: &Visitor,
    form: CartItemForm,
) -> ActionResult
where
    R: ProductReader + CartReader + CartWriter + ?Sized,
    C: Revalidate + ?Sized,
{
    ActionResult::from_outcome("Add to cart", try_add_item(repo, pages, visitor, form))
}

/// Take one unit of `product_id` out of the visitor's cart.
pub fn remove_item_from_cart<R, C>(
    repo: &R,
    pages: &C,
    visitor: &Visitor,
    product_id: i32,
) -> ActionResult
where
    R: ProductReader + CartReader + CartWriter + ?Sized,
    C: Revalidate + ?Sized,
{
    ActionResult::from_outcome(
        "Remove from cart",
        try_remove_item(repo, pages, visitor, product_id),
    )
}

fn try_add_item<R, C>(
    repo: &R,
    pages: &C,
    visitor: &Visitor,
    form: CartItemForm,
) -> Result<String, ActionError>
where
    R: ProductReader + CartReader + CartWriter + ?Sized,
    C: Revalidate + ?Sized,
{
    let owner = visitor.owner()?;
    let item = form.into_cart_item()?;
    let product = find_product(repo, item.product_id)?;

    let message = match repo.find_cart(&owner)? {
        None => {
            let mut items = Vec::with_capacity(1);
            merge_item(&mut items, item, product.stock)?;
            let new_cart = NewCart::new(visitor.require_session()?, items)?
                .with_user_id(visitor.user_id.clone());
            repo.create_cart(&new_cart)?;
            format!("{} added to cart", product.name)
        }
        Some(cart) => {
            let mut items = cart.items;
            let change = merge_item(&mut items, item, product.stock)?;
            repo.update_cart(cart.id, &UpdateCart::new(items)?)?;
            match change {
                LineChange::Added => format!("{} added to cart", product.name),
                LineChange::Updated => format!("{} updated in cart", product.name),
            }
        }
    };

    pages.revalidate_path(&product.page_path());

    Ok(message)
}

fn try_remove_item<R, C>(
    repo: &R,
    pages: &C,
    visitor: &Visitor,
    product_id: i32,
) -> Result<String, ActionError>
where
    R: ProductReader + CartReader + CartWriter + ?Sized,
    C: Revalidate + ?Sized,
{
    let owner = visitor.owner()?;
    let product = find_product(repo, product_id)?;
    let cart = repo.find_cart(&owner)?.ok_or(ActionError::CartNotFound)?;

    let mut items = cart.items;
    take_one(&mut items, product_id)?;
    repo.update_cart(cart.id, &UpdateCart::new(items)?)?;

    pages.revalidate_path(&product.page_path());

    Ok(format!("{} was removed from cart", product.name))
}

fn find_product<R>(repo: &R, product_id: i32) -> Result<Product, ActionError>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)?
        .ok_or(ActionError::ProductNotFound)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineChange {
    Added,
    Updated,
}

/// Merge `item` into `items`, never duplicating a product line.
fn merge_item(
    items: &mut Vec<CartItem>,
    item: CartItem,
    stock: i32,
) -> Result<LineChange, ActionError> {
    match items
        .iter_mut()
        .find(|line| line.product_id == item.product_id)
    {
        Some(line) => {
            let qty = line
                .qty
                .checked_add(1)
                .filter(|qty| *qty <= stock)
                .ok_or(ActionError::InsufficientStock)?;
            line.qty = qty;
            Ok(LineChange::Updated)
        }
        None => {
            if stock < item.qty {
                return Err(ActionError::InsufficientStock);
            }
            items.push(item);
            Ok(LineChange::Added)
        }
    }
}

/// Drop the line for `product_id` when a single unit is left, otherwise
/// decrement it.
fn take_one(items: &mut Vec<CartItem>, product_id: i32) -> Result<(), ActionError> {
    let position = items
        .iter()
        .position(|line| line.product_id == product_id)
        .ok_or(ActionError::ItemNotFound)?;

    if items[position].qty <= 1 {
        items.remove(position);
    } else {
        items[position].qty -= 1;
    }

    Ok(())
}

/// Cart rendered with string amounts for templates and JSON clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartView {
    pub id: i32,
    pub user_id: Option<String>,
    pub session_cart_id: String,
    pub items: Vec<CartItemView>,
    #[serde(flatten)]
    pub prices: FormattedCartPrices,
    pub total_quantity: i32,
}

/// Cart line with string amounts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub slug: String,
    pub qty: i32,
    pub image: String,
    pub price: String,
    pub line_total: String,
}

impl From<CartItem> for CartItemView {
    fn from(item: CartItem) -> Self {
        Self {
            line_total: item.line_total().map(format_money).unwrap_or_default(),
            price: format_money(item.price),
            product_id: item.product_id,
            name: item.name,
            slug: item.slug,
            qty: item.qty,
            image: item.image,
        }
    }
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        let total_quantity = cart.total_quantity();
        Self {
            id: cart.id,
            user_id: cart.user_id,
            session_cart_id: cart.session_cart_id,
            items: cart.items.into_iter().map(CartItemView::from).collect(),
            prices: cart.prices.formatted(),
            total_quantity,
        }
    }
}
