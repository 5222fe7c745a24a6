#[macro_use]
extern crate criterion;
extern crate rs_blackjack;

use rand::rng;
use rs_blackjack::core::{Deck, Shoe};

fn deal_all_shoe(c: &mut criterion::Criterion) {
    let mut rng = rng();

    c.bench_function("deal all from six deck Shoe", |b| {
        b.iter(|| {
            let mut shoe = Shoe::new(6);
            shoe.shuffle(&mut rng);
            while !shoe.is_empty() {
                let _card = shoe.deal().unwrap();
            }
        });
    });
}

fn deal_all_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();

    c.bench_function("deal all from Deck", |b| {
        b.iter(|| {
            let mut deck = Deck::default();
            while !deck.is_empty() {
                let _card = deck.deal(&mut rng).unwrap();
            }
        });
    });
}

criterion_group!(benches, deal_all_shoe, deal_all_deck);
criterion_main!(benches);
