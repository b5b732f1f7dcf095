//! Test utilities shared by the integration suites

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG`; repeated calls are no-ops
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Snippets with a known verdict under the default configuration
#[allow(dead_code)]
pub const KNOWN_SNIPPETS: &[(&str, Option<&str>)] = &[
    ("#!/usr/bin/env python\nprint('hi')", Some("python")),
    ("package main\n\nfunc main() {\n\tx := 1\n}", Some("go")),
    (
        "interface Foo { x: string }\nconst a: Foo = { x: '1' };",
        Some("typescript"),
    ),
    ("def foo():\n    return 1\n", Some("python")),
    ("", None),
    ("<?php echo 'hi'; ?>", Some("php")),
    ("#!/bin/bash\necho hi", Some("bash")),
    (
        "fn main() {\n    let mut total = 0;\n    println!(\"{}\", total);\n}",
        Some("rust"),
    ),
];

/// One typical snippet per extended detector: (detector, label, code)
#[allow(dead_code)]
pub const EXTENDED_SNIPPETS: &[(&str, &str, &str)] = &[
    ("json", "json", "{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\",\n  \"private\": true\n}"),
    ("yaml", "yaml", "name: CI\non: push\njobs:\n  build:\n    runs-on: ubuntu-latest"),
    ("toml", "toml", "[package]\nname = \"demo\"\nversion = \"0.1.0\"\nedition = \"2021\""),
    ("xml", "xml", "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project>\n  <modelVersion>4.0.0</modelVersion>\n</project>"),
    ("docker", "docker", "FROM rust:1.80 AS build\nWORKDIR /app\nCOPY . .\nRUN cargo build --release"),
    ("makefile", "makefile", "all: build\n\nbuild:\n\tgcc -o main main.c\n\nclean:\n\trm -f main"),
    ("nginx", "nginx", "server {\n    listen 80;\n    server_name example.com;\n    location / {\n        proxy_pass http://127.0.0.1:8080;\n    }\n}"),
    ("hcl", "hcl", "resource \"aws_instance\" \"web\" {\n  ami = \"ami-123\"\n  instance_type = \"t2.micro\"\n}"),
    ("graphql", "graphql", "query GetUser($id: ID!) {\n  user(id: $id) {\n    name\n    email\n  }\n}"),
    ("protobuf", "protobuf", "syntax = \"proto3\";\n\nmessage Person {\n  string name = 1;\n  int32 id = 2;\n}"),
    ("solidity", "solidity", "pragma solidity ^0.8.0;\n\ncontract Token {\n    mapping(address => uint256) public balances;\n}"),
    ("objectivec", "objectivec", "#import <Foundation/Foundation.h>\n\n@interface Greeter : NSObject\n- (void)greet;\n@end"),
    ("haskell", "haskell", "module Main where\n\nmain :: IO ()\nmain = putStrLn \"hello\""),
    ("elixir", "elixir", "defmodule Greeter do\n  def hello(name) do\n    IO.puts(\"Hello #{name}\")\n  end\nend"),
    ("erlang", "erlang", "-module(hello).\n-export([start/0]).\n\nstart() ->\n    io:format(\"hello~n\")."),
    ("lisp", "clojure", "(ns demo.core\n  (:require [clojure.string :as str]))\n\n(defn greet [name]\n  (str \"Hello \" name))"),
    ("ml", "ocaml", "let rec fact n =\n  if n = 0 then 1 else n * fact (n - 1)\n\nlet () = print_endline \"done\";;"),
    ("elm", "elm", "module Main exposing (main)\n\nimport Html exposing (text)\n\nmain =\n    text \"Hello\""),
    ("matlab", "matlab", "function y = square(x)\n    y = x.^2;\nend\n\ndisp(square(3));"),
    ("lua", "lua", "local function greet(name)\n  print(\"Hello \" .. name)\nend\n\ngreet(\"world\")"),
    ("perl", "perl", "use strict;\nuse warnings;\n\nmy $name = \"world\";\nprint \"Hello $name\\n\";"),
    ("r", "r", "library(ggplot2)\ndata <- read.csv(\"data.csv\")\nsummary(data)"),
    ("julia", "julia", "function greet(name::String)\n    println(\"Hello, $name\")\nend"),
    ("powershell", "powershell", "$files = Get-ChildItem -Path C:\\\\logs\nforeach ($f in $files) {\n    Write-Host $f.Name\n}"),
    ("batch", "batch", "@echo off\nset NAME=world\necho Hello %NAME%\npause"),
    ("tcl", "tcl", "#!/usr/bin/tclsh\nputs hi"),
    ("awk", "awk", "BEGIN { FS = \",\" }\n{ total += $3 }\nEND { print total }"),
    ("vim", "vim", "set number\nnnoremap <leader>w :w<CR>\nfunction! Foo()\n  echo 'hi'\nendfunction"),
    ("zig", "zig", "const std = @import(\"std\");\n\npub fn main() !void {\n    std.debug.print(\"hi\\n\", .{});\n}"),
    ("nim", "nim", "proc greet(name: string): string =\n  result = \"Hello \" & name\n\necho greet(\"world\")"),
    ("d", "d", "import std.stdio;\n\nvoid main()\n{\n    writeln(\"Hello\");\n}"),
    ("fortran", "fortran", "program hello\n  implicit none\n  print *, \"Hello\"\nend program hello"),
    ("cobol", "cobol", "       IDENTIFICATION DIVISION.\n       PROGRAM-ID. HELLO.\n       PROCEDURE DIVISION.\n           DISPLAY \"HELLO\".\n           STOP RUN."),
    ("pascal", "pascal", "program Hello;\nbegin\n  writeln('Hello');\nend."),
    ("ada", "ada", "with Ada.Text_IO; use Ada.Text_IO;\n\nprocedure Hello is\nbegin\n   Put_Line (\"Hello\");\nend Hello;"),
    ("assembly", "asm", "section .text\nglobal _start\n_start:\n    mov rax, 60\n    xor rdi, rdi\n    syscall"),
    ("shader", "glsl", "#version 330 core\nout vec4 FragColor;\nvoid main() {\n    FragColor = vec4(1.0);\n}"),
    ("hdl", "vhdl", "library ieee;\nuse ieee.std_logic_1164.all;\n\nentity blinker is\n  port (clk : in std_logic);\nend blinker;"),
    ("latex", "latex", "\\documentclass{article}\n\\begin{document}\nHello\n\\end{document}"),
    ("diff", "diff", "diff --git a/src/lib.rs b/src/lib.rs\n--- a/src/lib.rs\n+++ b/src/lib.rs\n@@ -1,3 +1,4 @@\n-old\n+new"),
    ("groovy", "groovy", "def name = 'world'\nprintln \"Hello ${name}\"\n\ntask build {\n    doLast { println 'done' }\n}"),
    ("coffeescript", "coffeescript", "square = (x) -> x * x\n\nclass Animal\n  constructor: (@name) ->\n\nalert square 3"),
    ("prolog", "prolog", "parent(tom, bob).\nparent(bob, ann).\n\ngrandparent(X, Z) :- parent(X, Y), parent(Y, Z)."),
    ("brainfuck", "brainfuck", "++++++++[>++++[>++>+++<<-]>+<<-]>>.>---."),
    ("ini", "ini", "; settings\n[database]\nhost = localhost\nport = 5432"),
];

/// Alternate labels of the multi-label extended detectors
#[allow(dead_code)]
pub const EXTENDED_VARIANTS: &[(&str, &str, &str)] = &[
    ("xml", "svg", "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\">\n  <circle cx=\"5\" cy=\"5\" r=\"4\"/>\n</svg>"),
    ("lisp", "racket", "#lang racket\n(define (square x) (* x x))"),
    ("lisp", "scheme", "(define (square x)\n  (* x x))\n\n(display (square 3))"),
    ("lisp", "lisp", "(defun square (x)\n  (* x x))\n\n(format t \"~a~%\" (square 3))"),
    ("ml", "fsharp", "let square x = x * x\n\n[<EntryPoint>]\nlet main argv =\n    printfn \"%d\" (square 3)\n    0"),
    ("shader", "hlsl", "struct VSOut { float4 pos : SV_POSITION; };\nfloat4 PSMain(VSOut input) : SV_TARGET {\n    return float4(1, 0, 0, 1);\n}"),
    ("shader", "wgsl", "@vertex\nfn vs_main(@builtin(vertex_index) i: u32) -> @builtin(position) vec4<f32> {\n    return vec4<f32>(0.0, 0.0, 0.0, 1.0);\n}"),
    ("hdl", "verilog", "module counter(input clk, output reg [3:0] q);\n  always @(posedge clk) begin\n    q <= q + 1;\n  end\nendmodule"),
];
