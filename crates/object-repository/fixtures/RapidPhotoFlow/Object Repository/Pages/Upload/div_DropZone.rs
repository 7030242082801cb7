<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Drag and drop zone for photo uploads</description>
   <name>div_DropZone</name>
   <tag></tag>
   <elementGuidId>upload-dropzone</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[contains(@class, 'dropzone') or contains(@class, 'border-dashed')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='upload-dropzone'], .dropzone, div.border-dashed</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
