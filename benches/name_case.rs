#[macro_use]
extern crate criterion;

mod bench {
    use criterion::{black_box, criterion_group, Criterion};
    use name_case::{Tally, RULES};
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    fn normalising_uppercase(c: &mut Criterion) {
        c.bench_function("all-caps", |b| {
            b.iter(|| black_box(name_case::normalise("HENDRIK VAN DER  POST")))
        });
    }

    fn normalising_already_normalised(c: &mut Criterion) {
        c.bench_function("already normalised", |b| {
            b.iter(|| black_box(name_case::normalise("Hendrik van der Post")))
        });
    }

    fn normalising_blank(c: &mut Criterion) {
        c.bench_function("punctuation only", |b| {
            b.iter(|| black_box(name_case::normalise("-$+ @$)(*&^^@*")))
        });
    }

    criterion_group!(
        e2e_normalising,
        normalising_uppercase,
        normalising_already_normalised,
        normalising_blank
    );

    fn tally(c: &mut Criterion) {
        c.bench_function("tally", |b| {
            b.iter(|| black_box(Tally::of(" Barbey d'Aurevilly ")))
        });
    }

    fn rules(c: &mut Criterion) {
        let mut group = c.benchmark_group("rules");
        for rule in RULES.iter() {
            group.bench_function(rule.name(), |b| {
                b.iter(|| black_box(rule.apply("Sergio De La Peña Macbride")))
            });
        }
        group.finish();
    }

    fn whitespace(c: &mut Criterion) {
        c.bench_function("collapse whitespace", |b| {
            b.iter(|| black_box(name_case::normalise_whitespace_to_empty(" arron  james-smith  ")))
        });
    }

    criterion_group!(parts, tally, rules, whitespace);

    fn normalising_many(c: &mut Criterion) {
        let f = File::open("tests/normalise-names.txt").ok().unwrap();
        let reader = BufReader::new(f);
        let names: Vec<String> = reader
            .lines()
            .map(|l| l.ok().unwrap())
            .filter(|l| !l.starts_with('#'))
            .filter_map(|l| l.split('|').next().map(str::to_string))
            .collect();

        c.bench_function(&format!("normalise {} names", names.len()), |b| {
            b.iter(|| {
                let mut changed = 0;
                for name in names.iter() {
                    if name_case::normalise(name.as_str()) != name.as_str() {
                        changed += 1;
                    }
                }
                black_box(changed)
            })
        });
    }

    criterion_group!(realistic, normalising_many);
}

criterion_main!(bench::realistic, bench::e2e_normalising, bench::parts);
