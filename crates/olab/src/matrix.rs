//! MATLAB-flavored array helpers on top of `ndarray`.
//!
//! `numel` counts elements without caring whether it was handed an array, a
//! list or a plain number. `hstack`, `vstack` and `flatten` are thin
//! forwarders to `ndarray`; shape errors come back as `ndarray::ShapeError`
//! untouched.
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use indexmap::IndexMap;
use ndarray::{concatenate, Array1, ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension, RawData, ShapeError};

use crate::record::Record;
use crate::value::Value;

/// Number of elements in a value, whatever container it is.
///
/// Arrays report their total size over all dimensions, sequences and maps
/// their length, and anything else counts as a single element.
pub trait Numel {
    fn numel(&self) -> usize;
}

/// Give the number of elements in `x`.
///
/// ```
/// use olab::matrix::numel;
/// use ndarray::array;
///
/// assert_eq!(numel(&3), 1);
/// assert_eq!(numel(&vec![1, 2, 3]), 3);
/// assert_eq!(numel(&array![[1, 2, 3], [4, 5, 6]]), 6);
/// ```
pub fn numel<T: Numel + ?Sized>(x: &T) -> usize {
    x.numel()
}

impl<S, D> Numel for ArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    fn numel(&self) -> usize {
        self.len()
    }
}

impl<T> Numel for [T] {
    fn numel(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Numel for [T; N] {
    fn numel(&self) -> usize {
        N
    }
}

impl<T> Numel for Vec<T> {
    fn numel(&self) -> usize {
        self.len()
    }
}

impl Numel for str {
    fn numel(&self) -> usize {
        self.chars().count()
    }
}

impl Numel for String {
    fn numel(&self) -> usize {
        self.as_str().numel()
    }
}

impl<K, V, H> Numel for HashMap<K, V, H> {
    fn numel(&self) -> usize {
        self.len()
    }
}

impl<K, V, H> Numel for IndexMap<K, V, H> {
    fn numel(&self) -> usize {
        self.len()
    }
}

impl<K, V> Numel for BTreeMap<K, V> {
    fn numel(&self) -> usize {
        self.len()
    }
}

impl<T, H> Numel for HashSet<T, H> {
    fn numel(&self) -> usize {
        self.len()
    }
}

impl<T> Numel for BTreeSet<T> {
    fn numel(&self) -> usize {
        self.len()
    }
}

impl<T: Numel + ?Sized> Numel for &T {
    fn numel(&self) -> usize {
        (**self).numel()
    }
}

macro_rules! scalar_numel {
    ($($t:ty),*) => {
        $(
            impl Numel for $t {
                fn numel(&self) -> usize {
                    1
                }
            }
        )*
    };
}

scalar_numel!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

// A record is a single struct, not a collection of its fields.
impl Numel for Record {
    fn numel(&self) -> usize {
        1
    }
}

impl Numel for Value {
    fn numel(&self) -> usize {
        match self {
            Value::Str(s) => s.numel(),
            Value::List(items) => items.len(),
            Value::Array(a) => a.len(),
            _ => 1,
        }
    }
}

fn atleast_1d<A>(view: ArrayViewD<'_, A>) -> ArrayViewD<'_, A> {
    if view.ndim() == 0 {
        view.insert_axis(Axis(0))
    } else {
        view
    }
}

fn atleast_2d<A>(view: ArrayViewD<'_, A>) -> ArrayViewD<'_, A> {
    match view.ndim() {
        0 => view.insert_axis(Axis(0)).insert_axis(Axis(0)),
        1 => view.insert_axis(Axis(0)),
        _ => view,
    }
}

/// Stack arrays in sequence horizontally (column wise).
///
/// One-dimensional inputs are joined end to end; higher-dimensional inputs
/// are joined along their second axis. Scalars (0-d arrays) are treated as
/// length-one vectors.
///
/// # Errors
///
/// Returns `ShapeError` when `arrays` is empty or the shapes are incompatible.
pub fn hstack<A, S, D>(arrays: &[ArrayBase<S, D>]) -> Result<ArrayD<A>, ShapeError>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    let views: Vec<ArrayViewD<'_, A>> = arrays
        .iter()
        .map(|a| atleast_1d(a.view().into_dyn()))
        .collect();
    let axis = match views.first() {
        Some(first) if first.ndim() == 1 => Axis(0),
        Some(_) => Axis(1),
        None => Axis(0),
    };
    log::trace!("hstack: joining {} arrays along axis {}", views.len(), axis.index());
    concatenate(axis, &views)
}

/// Stack arrays in sequence vertically (row wise).
///
/// Scalars and one-dimensional inputs become single rows before joining
/// along the first axis.
///
/// # Errors
///
/// Returns `ShapeError` when `arrays` is empty or the shapes are incompatible.
pub fn vstack<A, S, D>(arrays: &[ArrayBase<S, D>]) -> Result<ArrayD<A>, ShapeError>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    let views: Vec<ArrayViewD<'_, A>> = arrays
        .iter()
        .map(|a| atleast_2d(a.view().into_dyn()))
        .collect();
    log::trace!("vstack: joining {} arrays along axis 0", views.len());
    concatenate(Axis(0), &views)
}

/// Copy the elements of `array` into a one-dimensional array, in logical
/// row-major order.
pub fn flatten<A, S, D>(array: &ArrayBase<S, D>) -> Array1<A>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.iter().cloned().collect()
}
