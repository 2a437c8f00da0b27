use smolfmt::{fmt, AnyFmt, CustomFormat, Formatter, SmallBuf};

struct Celsius(i32);

impl CustomFormat for Celsius {
    fn format(&self, f: &mut Formatter<'_>) {
        f.write_int(i64::from(self.0));
        f.write_str("\u{00b0}C");
    }
}

fn main() {
    // Buffers flush to any io::Write sink.
    let mut buf = SmallBuf::<16>::new();
    buf.push(b'H');
    buf.append(b"ello world!");
    buf.append(b" This long tail pushes the buffer onto the heap.\n");
    let _ = buf.write_to(&mut std::io::stdout());

    smolfmt::println!("Testing, {}!", "123");
    smolfmt::println!("Testing, {:+9}!", 123);
    smolfmt::println!("Testing, {: =*%D}!", 9, "123");
    smolfmt::println!("Testing, {: -10%x}!", -123);
    smolfmt::println!("{%b} {%o} {%d} {%X}", 42, 42, 42, 42);
    smolfmt::println!("base five: {%r5}", 789942);
    smolfmt::println!("first letter of {}: {%c}", "ABC", "ABC");

    let outside = Celsius(-4);
    smolfmt::println!("it is {} outside", AnyFmt::new(&outside));

    let line = fmt!("{: =30}", "fin");
    smolfmt::println!("[{}]", line);
}
