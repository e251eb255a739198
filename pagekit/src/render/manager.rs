//! File manager template: sidebar navigation plus a file table
//!
//! Fixed-width location sidebar, breadcrumb toolbar, and a scrollable table
//! of files built from `SidebarItem`/`FileRow` helper components.

/// Entry point: fetches data server-side and hands it to the view.
pub const PAGE_TSX: &str = r#"import { getAssets } from '@/lib/data'
import { {{component_name}}View } from './view'

/*
 * ===========================================
 * {{title_upper}} - FILE MANAGER
 * ===========================================
 */

export default async function {{component_name}}Page() {
  const assets = await getAssets()
  return <{{component_name}}View title="{{title}}" assets={assets} />
}
"#;

/// Client view: location sidebar, breadcrumb toolbar, and file table.
pub const VIEW_TSX: &str = r#"'use client'

import { Stack, Text, Card, Button, Input } from '@/components/ui'
import { Search, Folder, ChevronRight, MoreHorizontal, FileText, Image as ImageIcon, ChevronDown } from 'lucide-react'
import { cn } from '@/lib/utils'
import type { Asset } from '@/lib/data'

export function {{component_name}}View({ title, assets }: { title: string, assets: Asset[] }) {
  return (
    <div className="flex h-screen bg-surface-0">

      {/* Sidebar */}
      <div className="w-64 border-r border-border-subtle p-4 flex flex-col gap-6">
        <Stack spacing="sm">
          <Text variant="caption" weight="bold" color="secondary" className="px-2">LOCATIONS</Text>
          <SidebarItem active label="All Files" icon={<Folder className="w-4 h-4" />} />
          <SidebarItem label="Shared" icon={<Folder className="w-4 h-4" />} />
          <SidebarItem label="Trash" icon={<Folder className="w-4 h-4" />} />
        </Stack>

        <Stack spacing="sm">
          <Text variant="caption" weight="bold" color="secondary" className="px-2">FOLDERS</Text>
          <SidebarItem label="Marketing" indent />
          <SidebarItem label="Product" indent />
          <SidebarItem label="Sales" indent />
          <SidebarItem label="Legal" indent />
        </Stack>
      </div>

      {/* Main Content */}
      <div className="flex-1 flex flex-col min-w-0">

        {/* Toolbar */}
        <div className="h-16 border-b border-border-subtle flex items-center justify-between px-6 bg-surface-0">
          <Stack direction="horizontal" align="center" spacing="sm">
            <Text variant="body-2" color="secondary">All Files</Text>
            <ChevronRight className="w-4 h-4 text-foreground-subtle" />
            <Text variant="body-2" weight="medium">Marketing</Text>
          </Stack>
          <Stack direction="horizontal" spacing="sm">
             <div className="w-64">
               <Input placeholder="Search..." icon={<Search className="w-4 h-4" />} iconPosition="left" />
             </div>
             <Button variant="primary" icon={<Folder className="w-4 h-4" />}>New Folder</Button>
          </Stack>
        </div>

        {/* File List */}
        <div className="flex-1 overflow-auto p-6">
          <Card padding="none" variant="outlined">
            <div className="grid grid-cols-12 gap-4 px-6 py-3 border-b border-border-subtle bg-surface-2 text-xs font-medium text-foreground-dim uppercase tracking-wider">
              <div className="col-span-6">Name</div>
              <div className="col-span-3">Date Modified</div>
              <div className="col-span-2">Size</div>
              <div className="col-span-1"></div>
            </div>
            <div className="divide-y divide-border-subtle">
              {assets.map((asset) => (
                <FileRow
                  key={asset.id}
                  name={asset.name}
                  type={asset.type}
                  date={new Date(asset.created_at || new Date()).toLocaleDateString()}
                  size={asset.size || '--'}
                />
              ))}
            </div>
          </Card>
        </div>

      </div>
    </div>
  )
}

function SidebarItem({ label, icon, active, indent }: { label: string, icon?: any, active?: boolean, indent?: boolean }) {
  return (
    <div className={cn(
      "flex items-center gap-2 px-2 py-1.5 rounded-md cursor-pointer text-sm transition-colors",
      active ? "bg-primary/10 text-primary font-medium" : "text-foreground-dim hover:bg-surface-highlight hover:text-foreground",
      indent && "pl-8"
    )}>
      {icon || <ChevronDown className="w-3 h-3 text-foreground-subtle" />}
      {label}
    </div>
  )
}

function FileRow({ name, type, date, size }: { name: string, type: 'folder' | 'file' | 'image' | 'video', date: string, size: string }) {
  return (
    <div className="grid grid-cols-12 gap-4 px-6 py-3 items-center hover:bg-surface-highlight transition-colors cursor-pointer group">
      <div className="col-span-6 flex items-center gap-3">
        {type === 'folder' ? <Folder className="w-5 h-5 text-blue-400 fill-blue-400/20" /> :
         type === 'image' ? <ImageIcon className="w-5 h-5 text-purple-400" /> :
         <FileText className="w-5 h-5 text-gray-400" />}
        <Text variant="body-2" weight="medium">{name}</Text>
      </div>
      <div className="col-span-3">
        <Text variant="caption" color="secondary">{date}</Text>
      </div>
      <div className="col-span-2">
        <Text variant="caption" color="secondary">{size}</Text>
      </div>
      <div className="col-span-1 flex justify-end">
        <button className="opacity-0 group-hover:opacity-100 p-1 hover:bg-black/5 dark:hover:bg-white/10 rounded">
          <MoreHorizontal className="w-4 h-4 text-foreground-dim" />
        </button>
      </div>
    </div>
  )
}
"#;
