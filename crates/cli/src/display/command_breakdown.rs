use mocha_lens_core::MochaCommand;

pub fn print_command_breakdown(command: &MochaCommand) {
    println!("   🔧 Command breakdown:");
    println!("      • program: {}", command.program);

    let mut args = command.args.iter().peekable();
    while let Some(arg) = args.next() {
        if let Some(port) = arg.strip_prefix("--inspect-brk=") {
            println!("      • inspector: port {port}");
        } else if arg == "--grep" {
            if let Some(pattern) = args.next() {
                println!("      • grep: {pattern}");
            }
        } else if arg.starts_with('-') {
            println!("      • flag: {arg}");
        } else {
            println!("      • arg: {arg}");
        }
    }

    if let Some(ref dir) = command.working_dir {
        println!("      • working dir: {dir}");
    }
    for (key, value) in &command.env {
        println!("      • env: {key}={value}");
    }
    println!("   ▶️  {}", command.to_shell_command());
}
