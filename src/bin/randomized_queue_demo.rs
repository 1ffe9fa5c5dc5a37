use randq::{RandomizedQueue, StreamChooseK};

fn main() {
    let mut queue = RandomizedQueue::new();
    for item in ["a", "b", "c", "d", "e"] {
        queue.enqueue(item);
    }

    // Two iterations over the same queue come out in independent orders
    for _ in 0..2 {
        let order: Vec<&str> = queue.iter().copied().collect();
        println!("{}", order.join(" "));
    }

    let samples: Vec<&str> = (0..10).filter_map(|_| queue.sample().ok().copied()).collect();
    println!("samples: {}", samples.join(" "));

    let mut drained = Vec::new();
    while let Ok(item) = queue.dequeue() {
        drained.push(item);
    }
    println!("dequeued: {}", drained.join(" "));

    let mut sampler = StreamChooseK::new(3);
    sampler.extend(1..=100);
    let mut chosen = sampler.collection().to_vec();
    chosen.sort_unstable();
    println!("3 of the first {} integers: {:?}", sampler.count(), chosen);
}
