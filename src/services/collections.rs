//! Local list updates applied after successful mutations, so panels do not
//! re-fetch the whole collection.

use crate::models::{Booking, Category, Discount, Location, Payment, Refund, Review, Tour, User};

pub trait Identified {
    fn id(&self) -> i64;
}

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })+
    };
}

identified!(Booking, Category, Discount, Location, Payment, Refund, Review, Tour, User);

/// Replaces the item with the same id, or inserts it at the front.
pub fn upsert<T: Identified>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| existing.id() == item.id()) {
        Some(index) => items[index] = item,
        None => items.insert(0, item),
    }
}

/// Removes the item with `id`, returning whether anything was removed.
pub fn remove<T: Identified>(items: &mut Vec<T>, id: i64) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
