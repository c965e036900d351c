use kindred::linear::{GenerateLinear, LinearShapeOf};
use kindred::prelude::*;
use static_assertions::assert_type_eq_all;

#[derive(Debug, Clone, Default, PartialEq, Kind)]
struct A(u8);

#[derive(Debug, Clone, Default, PartialEq, Kind)]
struct B(&'static str);

#[derive(Debug, Clone, Default, PartialEq, Kind)]
struct C(i64);

type Abc = Seq![A, B, C];

fn values() -> (A, B, C) {
    (A(1), B("two"), C(-3))
}

#[test]
fn linear_and_scatter_agree() {
    let scatter = Record::<Abc>::new(values());
    let linear = LinearRecord::<Abc>::new(values(), Empty);

    assert_eq!(scatter.at::<0>(), linear.at::<0>());
    assert_eq!(scatter.at::<1>(), linear.at::<1>());
    assert_eq!(scatter.at::<2>(), linear.at::<2>());
    assert_eq!(scatter.field::<B>(), linear.field::<B>());

    assert_eq!(scatter.into_values(), linear.into_parts().0);
}

#[test]
fn linear_shape_nests() {
    assert_type_eq_all!(
        LinearShapeOf<Abc, Links, Empty>,
        Link<A, Link<B, Link<C, Empty>>>
    );
    assert_type_eq_all!(LinearShapeOf<Seq![A], Links, u32>, Link<A, u32>);

    let chain = LinearRecord::<Abc>::new(values(), Empty);
    assert_eq!(chain.shape().next.next.value, C(-3));
    assert_eq!(chain.shape().next().value, B("two"));
}

#[test]
fn writes_through_the_chain() {
    let mut chain = LinearRecord::<Seq![A, A, B]>::default();
    chain.at_mut::<1>().0 = 5;
    chain.field_mut::<B>().0 = "bee";

    assert_eq!(chain.at::<0>(), &A(0));
    assert_eq!(chain.at::<1>(), &A(5));
    assert_eq!(chain.into_list().0, (A(0), (A(5), (B("bee"), ()))));
}

#[derive(Debug, Default, PartialEq)]
struct Root {
    depth: usize,
}

#[test]
fn custom_root() {
    let mut chain = LinearRecord::<Seq![A, B], Root>::new((A(1), B("b")), Root { depth: 2 });
    assert_eq!(chain.root(), &Root { depth: 2 });
    assert_eq!(*chain.at::<1>(), B("b"));

    chain.shape_mut().next.next.depth += 1;
    let (values, root) = chain.into_parts();
    assert_eq!(values, (A(1), B("b")));
    assert_eq!(root, Root { depth: 3 });
}

#[derive(Debug, Default, PartialEq, Slot)]
struct Layer<K, Inner> {
    value: K,
    #[slot(next)]
    inner: Inner,
}

struct Layers;

impl<K, Inner> LinearGenerator<K, Inner> for Layers {
    type Unit = Layer<K, Inner>;
}

#[test]
fn custom_linear_generator() {
    assert_type_eq_all!(
        <Seq![A, B] as GenerateLinear<Layers, Root>>::Shape,
        Layer<A, Layer<B, Root>>
    );

    let mut onion = Linear::<Seq![A, B], Layers, Root>::default();
    onion.at_mut::<0>().value = A(1);
    onion.field_mut::<B>().value = B("b");
    onion.at_mut::<1>().inner.depth = 7;

    assert_eq!(onion.shape().value, A(1));
    assert_eq!(onion.shape().next().value, B("b"));
    assert_eq!(onion.shape().inner.inner, Root { depth: 7 });
}

#[test]
fn raw_units_of_a_chain() {
    let mut chain = LinearRecord::<Abc>::new(values(), Empty);
    chain.unit_mut::<C>().value = C(4);
    assert_eq!(chain.unit_at::<1>().value, B("two"));
    assert_eq!(chain.unit_at::<1>().next.value, C(4));
    assert_eq!(chain.unit_at::<2>().next, Empty);
}
