use criterion::{Criterion, black_box, criterion_group, criterion_main};
use phone_format::{PhoneFormatter, TemplateFormatter};
use phone_types::CountryCode;

fn bench_format_full_number(c: &mut Criterion) {
    let fmt = PhoneFormatter::new(TemplateFormatter::new());
    let country = CountryCode::new("US");
    c.bench_function("bench_format_full_number", |b| {
        b.iter(|| {
            let value = fmt.format(black_box("(415) 555-0123"), country, "");
            black_box(value);
        });
    });
}

fn bench_format_keystroke_sequence(c: &mut Criterion) {
    // Reformat after every keystroke, the way an input field drives it.
    let fmt = PhoneFormatter::new(TemplateFormatter::new());
    let country = CountryCode::new("US");
    let digits = "4155550123";
    c.bench_function("bench_format_keystroke_sequence", |b| {
        b.iter(|| {
            let mut field = String::new();
            for digit in digits.chars() {
                field.push(digit);
                let value = fmt.format(black_box(&field), country, "");
                field = value.number_formatted;
            }
            black_box(field);
        });
    });
}

fn bench_format_with_prefix(c: &mut Criterion) {
    let fmt = PhoneFormatter::new(TemplateFormatter::new());
    let country = CountryCode::new("US");
    c.bench_function("bench_format_with_prefix", |b| {
        b.iter(|| {
            let value = fmt.format(black_box("4155550123"), country, "1");
            black_box(value);
        });
    });
}

criterion_group!(
    benches,
    bench_format_full_number,
    bench_format_keystroke_sequence,
    bench_format_with_prefix
);
criterion_main!(benches);
