//! A walk through the wrapper types
//!
//! Run with `RUBYX_LOG=trace cargo run --example tour` to see the trace
//! events emitted on no-op paths such as a zero range step.

use rubyx_log::{debug, info};
use rubyx_value::prelude::*;

fn main() -> anyhow::Result<()> {
    let _guard = rubyx_log::auto_init()?;
    info!("rubyx tour starting");

    text();
    numbers()?;
    booleans();
    arrays();
    hashes()?;
    ranges();

    info!("rubyx tour finished");
    Ok(())
}

fn text() {
    println!("--- Text ---");
    let raw = Text::from("  Hello, World!  ");
    let s = raw.strip();
    println!("original   '{raw}'");
    println!("strip      {s}");
    println!("capitalize {}", s.capitalize());
    println!("reverse    {}", s.reverse());
    println!("upcase     {}", s.upcase());
    println!("title      {}", Text::from("the quick  brown fox").title());
    println!("swapcase   {}", s.swapcase());
    println!("blank?     {}", raw.is_blank());
    println!("length     {}", s.length());
    println!("words      {}", s.words());
    println!("chars      {}", s.chars());

    let phrase = Text::from("hello world hello");
    println!("gsub o->0  {}", phrase.gsub("o", "0"));
    println!("sub o->0   {}", phrase.sub("o", "0"));

    let mut shout = Text::from("quiet please");
    shout.enforce_upcase();
    println!("enforced   {shout}");

    let sym = Symbol::new("user_status");
    println!("symbol     {sym:?} title={:?} split={}", sym.title(), sym.split("_"));
    println!();
}

fn numbers() -> anyhow::Result<()> {
    println!("--- Integer / Float ---");
    let n = Integer::new(12);
    println!("{n}: odd={} even={} prime={}", n.is_odd(), n.is_even(), n.is_prime());
    println!("divisors     {}", n.divisors());
    println!("5!           {}", Integer::new(5).factorial()?);
    println!("2^10         {}", Integer::new(2).power(10)?);
    println!("gcd(12, 18)  {}", n.gcd(Integer::new(18)));

    let mut counted = Vec::new();
    Integer::new(3).times(|i| counted.push(i.value()));
    println!("3.times      {counted:?}");

    let mut down = Vec::new();
    Integer::new(10).step(Integer::new(0), -3, |i| down.push(i.value()));
    println!("10.step(0,-3) {down:?}");

    if let Err(err) = Integer::new(100).factorial() {
        debug!(error = %err, "factorial overflow is reported, not panicked");
        println!("100!         {} ({})", err, err.code());
    }

    let x = Float::new(3.25);
    println!("3.25 ceil={} floor={} round={}", x.ceil(), x.floor(), x.round());
    println!("3.25^2       {}", x.power(Float::new(2.0)));
    println!("sqrt(16)     {}", Float::new(16.0).sqrt());
    println!("integer?     {}", x.is_integer());
    println!();
    Ok(())
}

fn booleans() {
    println!("--- Boolean ---");
    let flag = Boolean::new(true);
    println!("and  {}", flag.and(Boolean::new(true)));
    println!("or   {}", flag.or(Boolean::new(false)));
    println!("not  {}", flag.not());
    println!("xor  {}", flag ^ Boolean::new(true));
    println!("ternary {}", flag.ternary("yes", "no"));
    flag.if_true(|| println!("  it's true!"));
    println!();
}

fn arrays() {
    println!("--- Array ---");
    let langs: Array<Text> = Array::of(["ruby", "go", "ruby", "python", "javascript"]);
    let long = |s: &Text| s.length() > 3;

    println!("original  {langs}");
    println!("count     {}", langs.count(CountArg::All));
    println!("count ruby {}", langs.count(CountArg::Equals(Text::from("ruby"))));
    println!("count >3  {}", langs.count(CountArg::Predicate(&long)));
    println!("map       {}", langs.map(Text::upcase));
    println!("select    {}", langs.select(long));
    println!("reject    {}", langs.reject(long));
    println!("reverse   {}", langs.reverse());
    println!("uniq      {}", langs.uniq());
    println!("sort      {}", langs.sort());
    println!("first     {:?}", langs.first());
    println!("any >5    {}", langs.any(|s| s.length() > 5));
    println!("all >1    {}", langs.all(|s| s.length() > 1));
    println!("none >10  {}", langs.none(|s| s.length() > 10));
    println!("take 3    {}", langs.take(3));
    println!("drop 2    {}", langs.drop(2));
    println!("rotate 1  {}", langs.rotate(1));

    let groups: Vec<String> = langs.chunk(2).iter().map(ToString::to_string).collect();
    println!("chunk 2   {}", groups.join(" "));

    let (last, rest) = langs.pop();
    println!("pop       {last:?} leaves {rest}");
    println!("sample    {:?}", langs.sample());
    println!();
}

fn hashes() -> anyhow::Result<()> {
    println!("--- Hash ---");
    let mut scores: Hash<Text, Integer> = Hash::from([
        (Text::from("a"), Integer::new(1)),
        (Text::from("b"), Integer::new(2)),
        (Text::from("c"), Integer::new(3)),
        (Text::from("d"), Integer::new(4)),
    ]);
    println!("original  {scores}");
    println!("size      {}", scores.size());
    println!("has a?    {}", scores.has_key(&Text::from("a")));
    println!("fetch c   {}", scores.fetch(&Text::from("c"))?);
    println!("get z     {}", scores.get(&Text::from("z"), Integer::new(0)));
    println!("select >2 {}", scores.select(|_, v| v.value() > 2));

    scores.set(Text::from("e"), Integer::new(5));
    scores.delete_if(|_, v| v.is_odd());
    println!("evens     {scores}");

    let with_default = scores.with_default(Integer::new(-1));
    println!("at z      {:?}", with_default.at(&Text::from("z")));

    let inverted = scores.invert();
    println!("invert    {inverted}");
    println!();
    Ok(())
}

fn ranges() {
    println!("--- Range ---");
    let r = Range::new(Integer::new(1), Integer::new(5));
    println!("range     {r} size={} empty={}", r.size(), r.is_empty());
    println!("min/max   {}/{}", r.min(), r.max());
    println!("include 3 {} include 7 {}", r.include(Integer::new(3)), r.include(Integer::new(7)));
    println!("to_array  {}", r.to_array());

    let mut stepped = Vec::new();
    r.step(Integer::new(2), |i| stepped.push(i.value()));
    println!("step 2    {stepped:?}");

    let down = Range::exclusive(Integer::new(10), Integer::new(0));
    println!("{down} walks {}", down.to_array());

    // zero step: no values, one trace event
    r.step(Integer::new(0), |_| unreachable!());

    let halves = Range::new(Float::new(0.0), Float::new(2.0));
    let mut seen = Vec::new();
    halves.step(Float::new(0.5), |f| seen.push(f.to_str()));
    println!("{halves} by 0.5 {}", seen.join(" "));
}
