use popmap::PopularMap;

fn main() {
    let mut map: PopularMap<&str, &str> = PopularMap::new();

    map.insert("home", "index.html");
    map.insert("about", "about.html");
    map.insert("docs", "index.html");

    for _ in 0..3 {
        map.get(&"about");
    }
    map.get(&"docs");

    println!("most popular key: {:?}", map.popular_key());
    println!("most popular value: {:?}", map.popular_value());

    let mut ranked = map.popular_iter();
    while let Some((value, count)) = ranked.next_with_count() {
        println!("{value}: {count}");
    }
}

// Expected output:
// most popular key: Ok("about")
// most popular value: Ok("about.html")
// index.html: 3
// about.html: 4
//
// Explanation: "about" was inserted once and read three times (4 charges to
// the key and to "about.html"). "index.html" was charged by two inserts and
// one read through "docs". The iterator yields least popular first.
