// Example: a horizontal ticker over mixed text/image items.
use marquee::{DataSource, Dequeuer, Marquee, MarqueeOptions, ReusableItem, Size};

#[derive(Debug, Default)]
struct Label {
    text: String,
}

enum Entry {
    Text(&'static str),
    Image,
}

struct Headlines(Vec<Entry>);

impl DataSource<Label> for Headlines {
    fn item_count(&mut self) -> usize {
        self.0.len()
    }

    fn item_for_index(
        &mut self,
        index: usize,
        items: &mut Dequeuer<'_, Label>,
    ) -> ReusableItem<Label> {
        match &self.0[index] {
            Entry::Text(text) => {
                let mut item = items.dequeue("text");
                item.text = (*text).to_owned();
                item
            }
            Entry::Image => {
                let mut item = items.dequeue("image");
                item.text = "[img]".to_owned();
                item
            }
        }
    }

    fn size_for_index(&mut self, index: usize) -> Size {
        match &self.0[index] {
            // One cell per character, like a terminal.
            Entry::Text(text) => Size::new(text.chars().count() as f64, 1.0),
            Entry::Image => Size::new(5.0, 1.0),
        }
    }
}

fn main() {
    let mut source = Headlines(vec![
        Entry::Text("markets open higher"),
        Entry::Image,
        Entry::Text("rain expected tonight"),
        Entry::Text("local team wins"),
    ]);

    let mut m = Marquee::new(
        MarqueeOptions::default()
            .with_speed(30.0)
            .with_tick_rate(60.0)
            .with_spacing(3.0)
            .with_margin(10.0),
    );
    m.register("text", Label::default);
    m.register("image", Label::default);
    m.set_viewport(Size::new(60.0, 1.0), &mut source);

    for frame in 0..600 {
        let report = m.tick(&mut source);
        if frame % 120 == 0 {
            let line: Vec<String> = m
                .visible_items()
                .map(|v| format!("{:>6.1}:{}", v.start(), v.item.text))
                .collect();
            println!("frame={frame} {report:?}\n  {}", line.join(" | "));
        }
    }
    println!("{:?}", m.snapshot());
}
