macro_rules! trace {
    ( @event $kind:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@event: {}", $kind);
    };

    ( @event $kind:expr, $($detail:expr),+ ) => {
        #[cfg(feature = "debug_trace")]
        {
            print!("@event: {}", $kind);

            $( print!(" {:?}", $detail); )+

            println!();
        }

        // NOTE: keeps traced bindings used when tracing is compiled out.
        #[cfg(not(feature = "debug_trace"))]
        {
            $( let _ = &$detail; )+
        }
    };

    ( @output $fragment:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!(">output: {:?}", $fragment);
    };
}
