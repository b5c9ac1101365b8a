use std::sync::Arc;
use std::thread;

use popmap::concurrent::SharedPopularMap;

fn main() {
    let map: Arc<SharedPopularMap<u32, String>> = Arc::new(SharedPopularMap::new());
    map.insert_all((0..8).map(|id| (id, format!("user-{id}"))));

    let workers: Vec<_> = (0..4u32)
        .map(|worker| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for round in 0..100 {
                    // every worker leans on id 3, plus one id of its own
                    map.get(&3);
                    if round % 2 == 0 {
                        map.get(&(worker + 4));
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    println!("popular key: {:?}", map.popular_key());
    println!("hits on id 3: {}", map.key_popularity(&3));
    println!("top value: {:?}", map.popular_iter().last());
}

// Expected output:
// popular key: Ok(3)
// hits on id 3: 400
// top value: Some("user-3")
//
// Explanation: bulk insertion is free, so id 3 is charged once per worker
// round (4 x 100). Ids 4..8 get 50 reads each.
